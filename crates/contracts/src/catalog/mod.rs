mod catalog;
pub mod query;

pub use catalog::{Catalog, CatalogError};
pub use query::{
    count_by_category, featured_products, filter_by_category, find_by_id, find_by_id_str,
    related_products,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::a001_product::{LocalizedName, Product, ProductId};
    use crate::enums::Category;

    pub fn product(id: u32, category: Category) -> Product {
        Product {
            id: ProductId(id),
            name: LocalizedName {
                en: format!("Perfume {}", id),
                fr: format!("Parfum {}", id),
                ar: format!("عطر {}", id),
            },
            category,
            price: 49.0,
            short_description: "Premium 50ml".into(),
            long_description: String::new(),
            fragrance_notes: "Musk".into(),
            image_ref: format!("/images/img{}.jpeg", id),
        }
    }
}
