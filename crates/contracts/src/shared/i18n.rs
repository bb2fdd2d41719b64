//! Статическая таблица строк интерфейса.
//!
//! Ключи и языки заданы закрытыми перечислениями, поэтому пропущенный перевод
//! не скомпилируется.

use crate::enums::{Category, Locale};

/// Объявляет `TextKey`, список `TextKey::ALL` и таблицу переводов из одного перечня,
/// чтобы ключ нельзя было добавить без перевода или забыть в `ALL`.
macro_rules! text_table {
    ($($key:ident => ($en:expr, $fr:expr, $ar:expr $(,)?)),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($key),+
        }

        impl TextKey {
            /// Все ключи в порядке объявления
            pub const ALL: &'static [TextKey] = &[$(TextKey::$key),+];

            /// Тексты в порядке (en, fr, ar)
            fn texts(&self) -> (&'static str, &'static str, &'static str) {
                match self {
                    $(TextKey::$key => ($en, $fr, $ar)),+
                }
            }
        }
    };
}

text_table! {
    // Навигация
    NavHome => ("Home", "Accueil", "الرئيسية"),
    NavShop => ("Shop", "Boutique", "المتجر"),
    NavAbout => ("About", "À propos", "من نحن"),
    NavContact => ("Contact", "Contact", "اتصل بنا"),

    // Магазин
    ShopTitle => ("Our", "Notre", "مجموعتنا"),
    ShopTitleSub => ("Collection", "Collection", "الفاخرة"),
    ShopDescription => (
        "Premium 50ml fragrances handcrafted with Moroccan elegance",
        "Parfums premium 50ml façonnés avec l'élégance marocaine",
        "عطور فاخرة 50 مل مصنوعة بأناقة مغربية",
    ),
    ShopFilter => ("Filter by category", "Filtrer par catégorie", "تصفية حسب الفئة"),
    ShopAllProducts => ("All Products", "Tous les produits", "جميع المنتجات"),
    ShopMen => ("Men", "Homme", "رجال"),
    ShopWomen => ("Women", "Femme", "نساء"),
    ShopLuxury => ("Luxury Packs", "Packs Luxe", "مجموعات فاخرة"),
    ShopShowing => ("Showing", "Affichage de", "عرض"),
    ShopOf => ("of", "sur", "من"),
    ShopProducts => ("products", "produits", "منتجات"),
    ShopNotFound => (
        "No products found in this category",
        "Aucun produit dans cette catégorie",
        "لا توجد منتجات في هذه الفئة",
    ),
    ShopLearnMore => ("Learn more", "En savoir plus", "اعرف المزيد"),

    // Карточка товара
    ProductBackToShop => ("Back to Shop", "Retour à la boutique", "العودة إلى المتجر"),
    ProductNotFound => ("Product not found", "Produit introuvable", "المنتج غير موجود"),
    ProductPrice => ("Price", "Prix", "السعر"),
    ProductDescription => ("Description", "Description", "الوصف"),
    ProductFragranceNotes => ("Fragrance Notes", "Notes olfactives", "مكونات العطر"),
    ProductPremiumQuality => ("Premium quality", "Qualité premium", "جودة عالية"),
    ProductLongLastingFormula => (
        "Long-lasting formula",
        "Formule longue tenue",
        "تركيبة تدوم طويلاً",
    ),
    ProductEthicallySourced => (
        "Ethically sourced ingredients",
        "Ingrédients d'origine éthique",
        "مكونات من مصادر أخلاقية",
    ),
    ProductLuxuryPackaging => ("Luxury packaging", "Emballage de luxe", "تغليف فاخر"),
    ProductYouMayAlsoLike => ("You May Also Like", "Vous aimerez aussi", "قد يعجبك أيضاً"),
    ProductContinueShopping => (
        "Continue Shopping",
        "Continuer vos achats",
        "متابعة التسوق",
    ),

    // Главная
    HomeTagline => ("EST. 2024", "DEPUIS 2024", "منذ 2024"),
    HomeTitle => ("BEN FARES", "BEN FARES", "بن فارس"),
    HomeSubtitle => ("PARFUMS", "PARFUMS", "للعطور"),
    HomeDescription => (
        "Luxury fragrances inspired by the heritage and mystique of Morocco",
        "Des parfums de luxe inspirés par l'héritage et le mystère du Maroc",
        "عطور فاخرة مستوحاة من تراث المغرب وسحره",
    ),
    HomeExploreBtn => ("Explore Collection", "Découvrir la collection", "اكتشف المجموعة"),
    HomeCraftedQuality => ("Crafted Quality", "Qualité artisanale", "جودة حرفية"),
    HomeCraftedQualityDesc => (
        "Every bottle is handcrafted with premium ingredients",
        "Chaque flacon est façonné à la main avec des ingrédients premium",
        "كل زجاجة مصنوعة يدوياً بمكونات فاخرة",
    ),
    HomeLongLasting => ("Long Lasting", "Longue tenue", "ثبات طويل"),
    HomeLongLastingDesc => (
        "Rich concentrations that stay with you all day",
        "Des concentrations riches qui vous accompagnent toute la journée",
        "تركيز غني يرافقك طوال اليوم",
    ),
    HomeEthicallySourced => ("Ethically Sourced", "Origine éthique", "مصادر أخلاقية"),
    HomeEthicallySourcedDesc => (
        "Ingredients chosen with respect for people and nature",
        "Des ingrédients choisis dans le respect des personnes et de la nature",
        "مكونات مختارة باحترام للإنسان والطبيعة",
    ),
    HomeFeaturedCollection => ("Featured", "Collection", "مجموعتنا"),
    HomeFeaturedCollectionSub => ("Collection", "Vedette", "المميزة"),
    HomeViewAllProducts => ("View All Products", "Voir tous les produits", "عرض جميع المنتجات"),
    HomeReadyExperience => ("Ready to", "Prêt à", "هل أنت مستعد"),
    HomeReadyExperienceSub => (
        "Experience Luxury?",
        "vivre le luxe ?",
        "لتجربة الفخامة؟",
    ),
    HomeOrderDirectly => (
        "Order directly on WhatsApp and get free delivery in Casablanca",
        "Commandez directement sur WhatsApp, livraison gratuite à Casablanca",
        "اطلب مباشرة عبر واتساب مع توصيل مجاني في الدار البيضاء",
    ),

    // Подвал
    FooterBrandDesc => (
        "Luxury fragrances inspired by Moroccan heritage",
        "Parfums de luxe inspirés de l'héritage marocain",
        "عطور فاخرة مستوحاة من التراث المغربي",
    ),
    FooterPremium => ("Premium 50ml fragrances", "Parfums premium 50ml", "عطور فاخرة 50 مل"),
    FooterQuickLinks => ("Quick Links", "Liens rapides", "روابط سريعة"),
    FooterCollections => ("Collections", "Collections", "المجموعات"),
    FooterMenFragrances => ("Men's Fragrances", "Parfums Homme", "عطور رجالية"),
    FooterWomenFragrances => ("Women's Fragrances", "Parfums Femme", "عطور نسائية"),
    FooterLuxuryPacks => ("Luxury Packs", "Packs Luxe", "مجموعات فاخرة"),
    FooterContact => ("Contact", "Contact", "تواصل معنا"),
    FooterWhatsappOrder => ("Order on WhatsApp", "Commander sur WhatsApp", "اطلب عبر واتساب"),
    FooterEmailUs => ("Email us", "Écrivez-nous", "راسلنا"),
    FooterInstagram => ("Instagram", "Instagram", "إنستغرام"),
    FooterMorocco => ("Casablanca, Morocco", "Casablanca, Maroc", "الدار البيضاء، المغرب"),
    FooterRights => ("All rights reserved.", "Tous droits réservés.", "جميع الحقوق محفوظة."),
    FooterCrafted => (
        "Crafted with passion in Morocco",
        "Créé avec passion au Maroc",
        "صُنع بشغف في المغرب",
    ),

    // Кнопки
    OrderOnWhatsapp => (
        "Order on WhatsApp",
        "Commander sur WhatsApp",
        "اطلب الآن عبر واتس آب 📲",
    ),
    ToggleTheme => ("Toggle dark mode", "Changer de thème", "تبديل الوضع الليلي"),
    Language => ("Language", "Langue", "اللغة"),
}

/// Строка интерфейса на выбранном языке
pub fn translate(locale: Locale, key: TextKey) -> &'static str {
    let (en, fr, ar) = key.texts();
    match locale {
        Locale::En => en,
        Locale::Fr => fr,
        Locale::Ar => ar,
    }
}

/// Подпись категории в фильтре
pub fn category_label(locale: Locale, category: Category) -> &'static str {
    let key = match category {
        Category::Men => TextKey::ShopMen,
        Category::Women => TextKey::ShopWomen,
        Category::Luxury => TextKey::ShopLuxury,
    };
    translate(locale, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations_not_empty() {
        for &key in TextKey::ALL {
            for locale in Locale::all() {
                assert!(!translate(locale, key).trim().is_empty(), "{:?}/{}", key, locale);
            }
        }
    }

    #[test]
    fn test_all_lists_every_key_once() {
        let unique: std::collections::HashSet<TextKey> = TextKey::ALL.iter().copied().collect();
        assert_eq!(unique.len(), TextKey::ALL.len());
        assert_eq!(TextKey::ALL.len(), 62);
        assert_eq!(TextKey::ALL.first(), Some(&TextKey::NavHome));
        assert_eq!(TextKey::ALL.last(), Some(&TextKey::Language));
        assert!(TextKey::ALL.contains(&TextKey::HomeOrderDirectly));
    }

    #[test]
    fn test_translate_picks_locale() {
        assert_eq!(translate(Locale::En, TextKey::NavShop), "Shop");
        assert_eq!(translate(Locale::Fr, TextKey::NavShop), "Boutique");
        assert_eq!(translate(Locale::Ar, TextKey::NavShop), "المتجر");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(Locale::En, Category::Luxury), "Luxury Packs");
        assert_eq!(category_label(Locale::Fr, Category::Men), "Homme");
        for category in Category::all() {
            assert!(!category_label(Locale::Ar, category).is_empty());
        }
    }
}
