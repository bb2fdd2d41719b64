pub mod deeplink;
pub mod intent;
pub mod message;

pub use deeplink::{build_chat_url, build_order_url, WHATSAPP_BASE_URL};
pub use intent::OrderIntent;
pub use message::{
    render_order_message, render_order_message_for_code, resolve_locale, FALLBACK_LOCALE,
};
