pub mod card_animated;
pub mod category_filter;
pub mod product_card;
pub mod whatsapp_button;

pub use card_animated::{stagger_delay, CardAnimated};
pub use category_filter::CategoryFilter;
pub use product_card::ProductCard;
pub use whatsapp_button::{ButtonVariant, WhatsAppButton};
