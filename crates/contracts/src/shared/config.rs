use crate::enums::Locale;
use crate::order::resolve_locale;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub contact: ContactConfig,
    pub site: SiteUrls,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrandConfig {
    pub name: String,
    pub full_name: String,
    pub established: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    /// Номер WhatsApp в международном формате, `+` допускается
    pub whatsapp_phone: String,
    pub email: String,
    pub instagram_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteUrls {
    pub base_url: String,
    pub og_image: String,
    /// Код языка по умолчанию; неизвестный код приводится к арабскому
    pub default_locale: String,
}

impl SiteConfig {
    pub fn default_locale(&self) -> Locale {
        resolve_locale(&self.site.default_locale)
    }

    /// Абсолютный адрес страницы сайта
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[brand]
name = "BEN FARES"
full_name = "BEN FARES PARFUMS"
established = 2024

[contact]
whatsapp_phone = "+212600000000"
email = "info@benfaresparfums.com"
instagram_url = "https://www.instagram.com/benfares_parfums"

[site]
base_url = "https://benfares.ma/"
og_image = "https://benfares.ma/og-image.jpg"
default_locale = "ar"
"#;

/// Load site configuration from a TOML document
pub fn load_config_from(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<SiteConfig> {
    log::debug!("Using default embedded configuration");
    load_config_from(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.brand.full_name, "BEN FARES PARFUMS");
        assert_eq!(config.contact.whatsapp_phone, "+212600000000");
        assert_eq!(config.default_locale(), Locale::Ar);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(load_config_from("[brand]\nname = 1").is_err());
        assert!(load_config_from("").is_err());
    }

    #[test]
    fn test_unknown_default_locale_falls_back() {
        let contents = DEFAULT_CONFIG.replace("default_locale = \"ar\"", "default_locale = \"de\"");
        let config = load_config_from(&contents).unwrap();
        assert_eq!(config.default_locale(), Locale::Ar);

        let contents = DEFAULT_CONFIG.replace("default_locale = \"ar\"", "default_locale = \"fr\"");
        let config = load_config_from(&contents).unwrap();
        assert_eq!(config.default_locale(), Locale::Fr);
    }

    #[test]
    fn test_absolute_url() {
        let config = load_config().unwrap();
        assert_eq!(config.absolute_url("/shop"), "https://benfares.ma/shop");
        assert_eq!(config.absolute_url("product/1"), "https://benfares.ma/product/1");
        assert_eq!(config.absolute_url("/"), "https://benfares.ma/");
    }
}
