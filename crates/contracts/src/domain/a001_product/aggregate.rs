use crate::domain::common::AggregateId;
use crate::enums::{Category, Locale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        match s.trim().parse::<u32>() {
            Ok(0) => Err("Product id must be positive".into()),
            Ok(value) => Ok(ProductId(value)),
            Err(e) => Err(format!("Invalid product id: {}", e)),
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Errors
// ============================================================================
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("product id must be positive")]
    InvalidId,

    #[error("product {id} has an empty {locale} name")]
    EmptyName { id: ProductId, locale: Locale },

    #[error("product {id} has an invalid price {price}")]
    InvalidPrice { id: ProductId, price: f64 },
}

// ============================================================================
// Localized name
// ============================================================================

/// Название товара на каждом из поддерживаемых языков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "nameEn")]
    pub en: String,

    #[serde(rename = "nameFr")]
    pub fr: String,

    #[serde(rename = "nameAr")]
    pub ar: String,
}

impl LocalizedName {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
            Locale::Ar => &self.ar,
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// Карточка товара каталога. После загрузки не изменяется
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(flatten)]
    pub name: LocalizedName,

    pub category: Category,

    /// Цена в дирхамах
    pub price: f64,

    /// Краткое описание (не локализуется)
    #[serde(rename = "description")]
    pub short_description: String,

    #[serde(rename = "longDescription")]
    pub long_description: String,

    /// Ноты аромата
    #[serde(rename = "notes")]
    pub fragrance_notes: String,

    /// Ссылка на статический файл изображения
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl Product {
    /// Название на выбранном языке
    pub fn name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }

    /// Адрес страницы товара внутри сайта
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id.as_string())
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.value() == 0 {
            return Err(ProductError::InvalidId);
        }

        for locale in Locale::all() {
            if self.name(locale).trim().is_empty() {
                return Err(ProductError::EmptyName {
                    id: self.id,
                    locale,
                });
            }
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ProductError::InvalidPrice {
                id: self.id,
                price: self.price,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId(1),
            name: LocalizedName {
                en: "Rose Pétales Doux".into(),
                fr: "Pétales de Rose Doux".into(),
                ar: "بتلات الورد الناعمة".into(),
            },
            category: Category::Women,
            price: 49.0,
            short_description: "Premium 50ml".into(),
            long_description: "Long".into(),
            fragrance_notes: "Rose Petals, Jasmine".into(),
            image_ref: "/images/img1.jpeg".into(),
        }
    }

    #[test]
    fn test_name_per_locale() {
        let product = sample();
        assert_eq!(product.name(Locale::En), "Rose Pétales Doux");
        assert_eq!(product.name(Locale::Fr), "Pétales de Rose Doux");
        assert_eq!(product.name(Locale::Ar), "بتلات الورد الناعمة");
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut product = sample();
        product.name.fr = "  ".into();
        assert_eq!(
            product.validate(),
            Err(ProductError::EmptyName {
                id: ProductId(1),
                locale: Locale::Fr
            })
        );

        let mut product = sample();
        product.price = 0.0;
        assert!(matches!(
            product.validate(),
            Err(ProductError::InvalidPrice { .. })
        ));

        let mut product = sample();
        product.id = ProductId(0);
        assert_eq!(product.validate(), Err(ProductError::InvalidId));
    }

    #[test]
    fn test_deserialize_seed_shape() {
        let json = r#"{
            "id": 2,
            "nameEn": "Cherry Splash",
            "nameFr": "Éclat de Cerise",
            "nameAr": "رذاذ الكرز",
            "category": "Men",
            "price": 49,
            "description": "Eau de Parfum Premium 50 ml",
            "longDescription": "BEN FARES Cherry Splash",
            "image": "/images/img2.jpeg",
            "notes": "Cerise Rouge, Bergamote"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(2));
        assert_eq!(product.name(Locale::Fr), "Éclat de Cerise");
        assert_eq!(product.category, Category::Men);
        assert_eq!(product.price, 49.0);
        assert_eq!(product.detail_path(), "/product/2");
    }

    #[test]
    fn test_id_from_string() {
        assert_eq!(ProductId::from_string("7"), Ok(ProductId(7)));
        assert!(ProductId::from_string("0").is_err());
        assert!(ProductId::from_string("abc").is_err());
        assert!(ProductId::from_string("-3").is_err());
    }
}
