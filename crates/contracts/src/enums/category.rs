use serde::{Deserialize, Serialize};

/// Товарные категории каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Luxury,
}

impl Category {
    /// Получить код категории (совпадает с данными каталога)
    pub fn code(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Luxury => "Luxury",
        }
    }

    /// Значение параметра `?category=` в адресе магазина
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
            Category::Luxury => "luxury",
        }
    }

    /// Получить все категории
    pub fn all() -> [Category; 3] {
        [Category::Men, Category::Women, Category::Luxury]
    }

    /// Парсинг из строки. Сравнение точное, с учётом регистра
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Men" => Some(Category::Men),
            "Women" => Some(Category::Women),
            "Luxury" => Some(Category::Luxury),
            _ => None,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "men" => Some(Category::Men),
            "women" => Some(Category::Women),
            "luxury" => Some(Category::Luxury),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Category::from_code("Men"), Some(Category::Men));
        assert_eq!(Category::from_code("men"), None);
        assert_eq!(Category::from_code("Wom"), None);
    }

    #[test]
    fn test_slug_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("unisex"), None);
    }
}
