use crate::enums::Locale;
use crate::shared::number_format::format_price_plain;

/// Язык, на который приводится неизвестный код
pub const FALLBACK_LOCALE: Locale = Locale::Ar;

/// Приведение кода языка к поддерживаемому.
///
/// Неизвестный код (например, устаревшее значение из localStorage)
/// не считается ошибкой и всегда даёт [`FALLBACK_LOCALE`].
pub fn resolve_locale(code: &str) -> Locale {
    match Locale::from_code(code) {
        Some(locale) => locale,
        None => {
            log::warn!(
                "unknown locale '{}', falling back to '{}'",
                code,
                FALLBACK_LOCALE.code()
            );
            FALLBACK_LOCALE
        }
    }
}

/// Текст сообщения для заказа через WhatsApp
pub fn render_order_message(locale: Locale, product_name: &str, price: f64) -> String {
    let price = format_price_plain(price);

    match locale {
        Locale::Ar => format!(
            "مرحباً بن فارس 👋\n\n\
             أنا مهتم بالعطر: {product_name}\n\
             💰 السعر: {price} درهم\n\
             📏 الحجم: 50 مل\n\n\
             أرغب في المزيد من المعلومات والتفاصيل الكاملة. شكراً 🙏"
        ),
        Locale::Fr => format!(
            "Bonjour BEN FARES 👋\n\n\
             Je suis intéressé par: {product_name}\n\
             💰 Prix: {price} DH\n\
             📏 Taille: 50 ml\n\n\
             Je veux plus d'informations. Merci 🙏"
        ),
        Locale::En => format!(
            "Hi BEN FARES 👋\n\n\
             I'm interested in: {product_name}\n\
             💰 Price: {price} DH\n\
             📏 Size: 50ml\n\n\
             I need more information. Thanks 🙏"
        ),
    }
}

/// То же по строковому коду языка, с приведением неизвестного кода
pub fn render_order_message_for_code(code: &str, product_name: &str, price: f64) -> String {
    render_order_message(resolve_locale(code), product_name, price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_message_contains_name_and_price() {
        let message = render_order_message(Locale::Fr, "Rose Pétales Doux", 49.0);
        assert!(message.contains("Rose Pétales Doux"));
        assert!(message.contains("49"));
        assert!(message.starts_with("Bonjour BEN FARES"));
    }

    #[test]
    fn test_each_locale_has_own_template() {
        let en = render_order_message(Locale::En, "Cherry Splash", 49.0);
        let fr = render_order_message(Locale::Fr, "Cherry Splash", 49.0);
        let ar = render_order_message(Locale::Ar, "Cherry Splash", 49.0);

        assert!(en.contains("I'm interested in: Cherry Splash"));
        assert!(en.contains("Price: 49 DH"));
        assert!(fr.contains("Prix: 49 DH"));
        assert!(ar.contains("49 درهم"));
        assert_ne!(en, fr);
        assert_ne!(fr, ar);
    }

    #[test]
    fn test_message_never_empty() {
        for locale in Locale::all() {
            let message = render_order_message(locale, "", 0.0);
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn test_price_printed_as_is() {
        let message = render_order_message(Locale::En, "Trilogy", 149.5);
        assert!(message.contains("Price: 149.5 DH"));

        let message = render_order_message(Locale::Fr, "Coffret", 1234.0);
        assert!(message.contains("Prix: 1234 DH"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_arabic() {
        assert_eq!(resolve_locale("de"), Locale::Ar);
        assert_eq!(resolve_locale(""), Locale::Ar);
        assert_eq!(resolve_locale("EN"), Locale::Ar);
        assert_eq!(resolve_locale("en"), Locale::En);

        assert_eq!(
            render_order_message_for_code("xx", "Bleu de Fares", 49.0),
            render_order_message(Locale::Ar, "Bleu de Fares", 49.0)
        );
    }
}
