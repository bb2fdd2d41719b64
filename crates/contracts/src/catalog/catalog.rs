use crate::domain::a001_product::{Product, ProductError, ProductId};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error(transparent)]
    InvalidProduct(#[from] ProductError),
}

/// Неизменяемый каталог товаров.
///
/// Собирается один раз при старте из фиксированного списка и дальше
/// только читается. Порядок товаров сохраняется как в исходных данных.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Проверяет инварианты (уникальность id, непустые названия, цена > 0)
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        log::debug!("catalog loaded: {} products", products.len());
        Ok(Self { products })
    }

    /// Разбор JSON-массива товаров в формате исходных данных сайта
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::product;
    use crate::enums::{Category, Locale};

    #[test]
    fn test_new_keeps_order() {
        let catalog = Catalog::new(vec![
            product(3, Category::Men),
            product(1, Category::Women),
            product(2, Category::Men),
        ])
        .unwrap();

        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![product(1, Category::Men), product(1, Category::Women)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(ProductId(1)))));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut broken = product(4, Category::Luxury);
        broken.name.ar = String::new();

        let result = Catalog::new(vec![product(1, Category::Men), broken]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct(ProductError::EmptyName {
                locale: Locale::Ar,
                ..
            }))
        ));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id": 1}]"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(Catalog::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let json = r#"[{
            "id": 1, "nameEn": "A", "nameFr": "A", "nameAr": "A",
            "category": "Unisex", "price": 49,
            "description": "", "longDescription": "", "image": "", "notes": ""
        }]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }
}
