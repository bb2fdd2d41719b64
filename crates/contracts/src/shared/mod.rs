pub mod config;
pub mod i18n;
pub mod number_format;
pub mod seo;
