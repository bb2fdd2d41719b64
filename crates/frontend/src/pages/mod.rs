pub mod about;
pub mod contact;
pub mod home;
pub mod product_details;
pub mod shop;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use product_details::ProductDetailsPage;
pub use shop::ShopPage;
