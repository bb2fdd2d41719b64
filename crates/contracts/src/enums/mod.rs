pub mod category;
pub mod locale;

pub use category::Category;
pub use locale::{Locale, TextDirection};
