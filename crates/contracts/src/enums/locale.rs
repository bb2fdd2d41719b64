use serde::{Deserialize, Serialize};

/// Поддерживаемые языки сайта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "fr")]
    Fr,
    #[default]
    #[serde(rename = "ar")]
    Ar,
}

/// Направление письма для атрибута `dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Получить короткий код языка
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Получить подпись для переключателя языка
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "🇬🇧 English",
            Locale::Fr => "🇫🇷 Français",
            Locale::Ar => "🇲🇦 العربية",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            Locale::En | Locale::Fr => TextDirection::Ltr,
        }
    }

    /// Получить все языки в порядке отображения
    pub fn all() -> [Locale; 3] {
        [Locale::En, Locale::Fr, Locale::Ar]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert_eq!(Locale::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Locale::En.direction().as_str(), "ltr");
        assert_eq!(Locale::Fr.direction().as_str(), "ltr");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Locale::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
        let parsed: Locale = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(parsed, Locale::Ar);
    }
}
