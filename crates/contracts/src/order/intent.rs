use super::deeplink::build_order_url;
use super::message::render_order_message;
use crate::domain::a001_product::Product;
use crate::enums::Locale;
use crate::shared::config::SiteConfig;

/// Намерение заказать: товар из каталога или произвольный запрос
#[derive(Debug, Clone, Copy)]
pub enum OrderIntent<'a> {
    Product(&'a Product),
    Inquiry { name: &'a str, price: f64 },
}

impl<'a> OrderIntent<'a> {
    /// Название для сообщения на выбранном языке
    pub fn display_name(&self, locale: Locale) -> &'a str {
        match *self {
            OrderIntent::Product(product) => product.name(locale),
            OrderIntent::Inquiry { name, .. } => name,
        }
    }

    pub fn price(&self) -> f64 {
        match *self {
            OrderIntent::Product(product) => product.price,
            OrderIntent::Inquiry { price, .. } => price,
        }
    }

    pub fn message(&self, locale: Locale) -> String {
        render_order_message(locale, self.display_name(locale), self.price())
    }

    /// Готовая ссылка `wa.me` на номер из конфигурации
    pub fn order_url(&self, locale: Locale, config: &SiteConfig) -> String {
        build_order_url(&config.contact.whatsapp_phone, &self.message(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::product;
    use crate::enums::Category;
    use crate::shared::config::load_config;

    #[test]
    fn test_product_intent_uses_localized_name() {
        let product = product(5, Category::Men);
        let intent = OrderIntent::Product(&product);

        assert_eq!(intent.display_name(Locale::Fr), "Parfum 5");
        assert_eq!(intent.display_name(Locale::Ar), "عطر 5");
        assert!(intent.message(Locale::En).contains("Perfume 5"));
    }

    #[test]
    fn test_inquiry_order_url() {
        let config = load_config().unwrap();
        let intent = OrderIntent::Inquiry {
            name: "Perfume Inquiry",
            price: 49.0,
        };

        let url = intent.order_url(Locale::En, &config);
        assert!(url.starts_with("https://wa.me/212600000000?text="));

        let (_, query) = url.split_once("?text=").unwrap();
        let decoded = urlencoding::decode(query).unwrap();
        assert_eq!(decoded, intent.message(Locale::En));
        assert!(decoded.contains("Perfume Inquiry"));
    }
}
