//! Common types and traits for catalog records

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
