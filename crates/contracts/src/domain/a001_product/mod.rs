pub mod aggregate;

pub use aggregate::{LocalizedName, Product, ProductError, ProductId};
