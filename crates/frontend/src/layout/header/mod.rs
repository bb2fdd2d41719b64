pub mod header;

pub use header::{Header, NAV_LINKS};
