//! Мета-теги страниц (title, description, Open Graph)

use super::config::SiteConfig;
use super::number_format::format_price_plain;
use crate::domain::a001_product::Product;
use crate::enums::{Category, Locale};

const DEFAULT_KEYWORDS: &str =
    "perfumes, fragrances, luxury perfumes, moroccan fragrances, ben fares";

/// Страницы сайта с собственными мета-тегами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitePage {
    Home,
    Shop(Option<Category>),
    About,
    Contact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_url: String,
    pub og_image: String,
    pub canonical: String,
}

impl PageMeta {
    fn new(config: &SiteConfig, title: &str, description: &str, keywords: &str, path: &str) -> Self {
        let url = config.absolute_url(path);
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.to_string(),
            og_url: url.clone(),
            og_image: config.site.og_image.clone(),
            canonical: url,
        }
    }
}

pub fn page_meta(page: SitePage, config: &SiteConfig) -> PageMeta {
    match page {
        SitePage::Home => PageMeta::new(
            config,
            "BEN FARES PARFUMS - Luxury Fragrances Inspired by Morocco | EST. 2024",
            "Discover BEN FARES PARFUMS - Premium handcrafted luxury fragrances inspired by Morocco. Shop luxury perfumes for men, women & unisex. Free delivery throughout Morocco.",
            "luxury fragrances, moroccan perfumes, handcrafted fragrance, premium scents, eau de parfum, fragrance store, perfume online, ben fares, luxury perfume",
            "/",
        ),
        SitePage::Shop(None) => PageMeta::new(
            config,
            "Shop Our Collection | BEN FARES PARFUMS - Premium Fragrances",
            "Browse our collection of 50ml premium handcrafted fragrances for men, women & unisex. Each perfume is inspired by Moroccan elegance and oriental mystique.",
            "buy perfumes, fragrance shop, luxury perfumes for sale, women perfumes, men perfumes, unisex fragrances, premium fragrances, handcrafted perfumes",
            "/shop",
        ),
        SitePage::Shop(Some(category)) => {
            let path = format!("/shop?category={}", category.slug());
            match category {
                Category::Women => PageMeta::new(
                    config,
                    "Women's Perfumes | BEN FARES PARFUMS - Luxury Fragrances",
                    "Shop luxury fragrances for women. Discover premium 50ml handcrafted perfumes inspired by Moroccan elegance. Romantic and sophisticated scents.",
                    "women perfumes, luxury fragrance for women, eau de parfum for women, female fragrances, women's scents",
                    &path,
                ),
                Category::Men => PageMeta::new(
                    config,
                    "Men's Perfumes | BEN FARES PARFUMS - Luxury Fragrances",
                    "Explore premium fragrances for men. Discover luxury 50ml handcrafted perfumes inspired by Morocco. Bold and sophisticated scents for gentlemen.",
                    "men perfumes, luxury fragrance for men, men's cologne, eau de cologne, men's scents, designer fragrances",
                    &path,
                ),
                Category::Luxury => PageMeta::new(
                    config,
                    "Luxury Collection | BEN FARES PARFUMS - Premium Trilogy Pack",
                    "Experience our luxury collection. Premium handcrafted fragrance packs inspired by Moroccan heritage. Perfect gift set for fragrance enthusiasts.",
                    "luxury perfume pack, premium fragrance collection, trilogy pack, fragrance gift set, luxury scents",
                    &path,
                ),
            }
        }
        SitePage::About => PageMeta::new(
            config,
            "About BEN FARES PARFUMS - Our Story & Heritage",
            "Learn about BEN FARES PARFUMS (EST. 2024). Discover how we craft luxury fragrances inspired by Moroccan heritage, artisanal traditions, and oriental mystique.",
            "about ben fares, moroccan craftsmanship, luxury perfume brand, artisanal fragrances, perfume heritage",
            "/about",
        ),
        SitePage::Contact => PageMeta::new(
            config,
            "Contact BEN FARES PARFUMS - Order via WhatsApp",
            "Get in touch with BEN FARES PARFUMS. Order luxury fragrances directly via WhatsApp. Fast response and delivery throughout Morocco.",
            "contact perfume store, whatsapp order, fragrance customer service, order perfumes online",
            "/contact",
        ),
    }
}

pub fn product_meta(product: &Product, locale: Locale, config: &SiteConfig) -> PageMeta {
    let name = product.name(locale);
    let brand = &config.brand.full_name;

    PageMeta::new(
        config,
        &format!("{} | {} - Premium Fragrance", name, brand),
        &format!(
            "{} - {} DH. Premium handcrafted 50ml fragrance from {}.",
            product.short_description,
            format_price_plain(product.price),
            brand
        ),
        &format!(
            "{}, perfume, fragrance, {} fragrance, buy perfume online",
            name,
            product.category.code()
        ),
        &product.detail_path(),
    )
}

pub fn not_found_meta(config: &SiteConfig) -> PageMeta {
    PageMeta::new(
        config,
        "Product Not Found",
        "Product not found",
        DEFAULT_KEYWORDS,
        "/",
    )
}
