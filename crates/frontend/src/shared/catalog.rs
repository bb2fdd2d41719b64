//! Каталог и настройки сайта, встроенные в бандл.
//!
//! Оба значения создаются один раз при первом обращении и дальше только читаются.

use contracts::catalog::Catalog;
use contracts::shared::config::{load_config, load_config_from, SiteConfig};
use once_cell::sync::Lazy;

const PRODUCTS_SEED: &str = include_str!("../../data/products.json");
const SITE_CONFIG: &str = include_str!("../../data/site.toml");

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(PRODUCTS_SEED) {
    Ok(catalog) => catalog,
    Err(err) => {
        log::error!("Failed to load product catalog: {}", err);
        Catalog::empty()
    }
});

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    load_config_from(SITE_CONFIG)
        .or_else(|err| {
            log::error!("Invalid site.toml, using embedded defaults: {:#}", err);
            load_config()
        })
        .expect("embedded default configuration must parse")
});

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

pub fn site_config() -> &'static SiteConfig {
    &CONFIG
}
