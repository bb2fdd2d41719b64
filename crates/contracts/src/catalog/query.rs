//! Запросы к каталогу: фильтр по категории, поиск по id, похожие товары.
//!
//! Все функции чистые: каталог не изменяется, каждый вызов заново
//! просматривает список. Индексы не нужны при нескольких десятках товаров.

use super::Catalog;
use crate::domain::a001_product::{Product, ProductId};
use crate::domain::common::AggregateId;
use crate::enums::Category;

/// Товары выбранной категории в исходном порядке.
/// `None` означает "все товары"
pub fn filter_by_category(catalog: &Catalog, category: Option<Category>) -> Vec<&Product> {
    catalog
        .products()
        .iter()
        .filter(|product| category.map_or(true, |c| product.category == c))
        .collect()
}

/// Количество товаров, попадающих под фильтр
pub fn count_by_category(catalog: &Catalog, category: Option<Category>) -> usize {
    catalog
        .products()
        .iter()
        .filter(|product| category.map_or(true, |c| product.category == c))
        .count()
}

/// Поиск товара по id. `None`, если товар не найден
pub fn find_by_id(catalog: &Catalog, id: ProductId) -> Option<&Product> {
    catalog.products().iter().find(|product| product.id == id)
}

/// Поиск по параметру из адреса страницы (`/product/:id`)
pub fn find_by_id_str<'a>(catalog: &'a Catalog, raw_id: &str) -> Option<&'a Product> {
    let id = ProductId::from_string(raw_id).ok()?;
    find_by_id(catalog, id)
}

/// До `limit` товаров той же категории, кроме самого товара
pub fn related_products<'a>(
    catalog: &'a Catalog,
    product: &Product,
    limit: usize,
) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|candidate| candidate.category == product.category && candidate.id != product.id)
        .take(limit)
        .collect()
}

/// Первые `limit` товаров каталога для главной страницы
pub fn featured_products(catalog: &Catalog, limit: usize) -> Vec<&Product> {
    catalog.products().iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::product;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, Category::Men),
            product(2, Category::Men),
            product(3, Category::Women),
            product(4, Category::Luxury),
        ])
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_filter_men_keeps_order() {
        let catalog = catalog();
        let men = filter_by_category(&catalog, Some(Category::Men));
        assert_eq!(ids(&men), vec![1, 2]);
        assert_eq!(count_by_category(&catalog, Some(Category::Men)), 2);
    }

    #[test]
    fn test_filter_every_category() {
        let catalog = catalog();
        for category in Category::all() {
            let result = filter_by_category(&catalog, Some(category));
            assert!(result.iter().all(|p| p.category == category));

            let expected = catalog
                .products()
                .iter()
                .filter(|p| p.category == category)
                .count();
            assert_eq!(result.len(), expected);
            assert_eq!(count_by_category(&catalog, Some(category)), expected);
        }
    }

    #[test]
    fn test_filter_none_returns_all() {
        let catalog = catalog();
        let all = filter_by_category(&catalog, None);
        let expected: Vec<&Product> = catalog.products().iter().collect();
        assert_eq!(all, expected);
        assert_eq!(count_by_category(&catalog, None), 4);
    }

    #[test]
    fn test_filter_is_repeatable_and_empty_is_ok() {
        let catalog = Catalog::new(vec![product(1, Category::Men)]).unwrap();
        let before = catalog.clone();

        let first = filter_by_category(&catalog, Some(Category::Women));
        let second = filter_by_category(&catalog, Some(Category::Women));
        assert!(first.is_empty());
        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        assert_eq!(find_by_id(&catalog, ProductId(3)).map(|p| p.id), Some(ProductId(3)));
        assert!(find_by_id(&catalog, ProductId(999)).is_none());
        assert!(find_by_id(&Catalog::empty(), ProductId(1)).is_none());
    }

    #[test]
    fn test_find_by_id_str() {
        let catalog = catalog();
        assert_eq!(find_by_id_str(&catalog, "4").map(|p| p.id), Some(ProductId(4)));
        assert!(find_by_id_str(&catalog, "999").is_none());
        assert!(find_by_id_str(&catalog, "0").is_none());
        assert!(find_by_id_str(&catalog, "four").is_none());
        assert!(find_by_id_str(&catalog, "").is_none());
    }

    #[test]
    fn test_related_products() {
        let catalog = Catalog::new(vec![
            product(1, Category::Men),
            product(2, Category::Women),
            product(3, Category::Men),
            product(4, Category::Men),
            product(5, Category::Men),
            product(6, Category::Men),
        ])
        .unwrap();
        let base = find_by_id(&catalog, ProductId(3)).unwrap();

        let related = related_products(&catalog, base, 3);
        assert_eq!(ids(&related), vec![1, 4, 5]);
        assert!(related.iter().all(|p| p.category == base.category && p.id != base.id));

        assert!(related_products(&catalog, base, 0).is_empty());
        assert_eq!(related_products(&catalog, base, 10).len(), 4);
    }

    #[test]
    fn test_related_for_single_in_category() {
        let catalog = catalog();
        let luxury = find_by_id(&catalog, ProductId(4)).unwrap();
        assert!(related_products(&catalog, luxury, 3).is_empty());
    }

    #[test]
    fn test_featured_products() {
        let catalog = catalog();
        assert_eq!(ids(&featured_products(&catalog, 3)), vec![1, 2, 3]);
        assert_eq!(featured_products(&catalog, 10).len(), 4);
        assert!(featured_products(&catalog, 0).is_empty());
    }
}
