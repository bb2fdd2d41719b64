//! Ссылки на WhatsApp (`wa.me`) с заранее заполненным сообщением

/// Адрес сервиса без завершающего слеша
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Номер без ведущего `+`
fn normalize_phone(phone: &str) -> &str {
    let phone = phone.trim();
    phone.strip_prefix('+').unwrap_or(phone)
}

/// Ссылка на чат без текста
pub fn build_chat_url(phone: &str) -> String {
    format!("{}/{}", WHATSAPP_BASE_URL, normalize_phone(phone))
}

/// Ссылка на чат с сообщением в параметре `text`.
///
/// Номер не проверяется; сообщение кодируется целиком,
/// поэтому декодирование параметра даёт исходный текст.
pub fn build_order_url(phone: &str, message: &str) -> String {
    format!(
        "{}?text={}",
        build_chat_url(phone),
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_text(url: &str) -> String {
        let (_, query) = url.split_once("?text=").unwrap();
        urlencoding::decode(query).unwrap().into_owned()
    }

    #[test]
    fn test_order_url_layout() {
        let url = build_order_url("212600000000", "Hi 😊");
        let prefix = format!("{}/", WHATSAPP_BASE_URL);
        assert!(url.starts_with(&prefix));
        assert!(url[prefix.len()..].starts_with("212600000000?text="));
        assert_eq!(decode_text(&url), "Hi 😊");
    }

    #[test]
    fn test_leading_plus_is_stripped() {
        assert_eq!(build_chat_url("+212600000000"), "https://wa.me/212600000000");
        assert_eq!(
            build_order_url("+212600000000", "a b"),
            "https://wa.me/212600000000?text=a%20b"
        );
    }

    #[test]
    fn test_round_trip_reserved_characters() {
        let messages = [
            "Hello world",
            "a&b=c?d#e/f+g%h",
            "Prix: 49 DH\n📏 Taille: 50 ml",
            "مرحباً بن فارس 👋",
            "",
        ];

        for message in messages {
            let url = build_order_url("212600000000", message);
            let (_, query) = url.split_once("?text=").unwrap();
            assert!(!query.contains(' '));
            assert!(!query.contains('&'));
            assert!(!query.contains('#'));
            assert_eq!(decode_text(&url), message);
        }
    }

    #[test]
    fn test_phone_not_validated() {
        assert_eq!(build_chat_url("not-a-number"), "https://wa.me/not-a-number");
    }
}
