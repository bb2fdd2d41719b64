use crate::shared::catalog::{catalog, site_config};
use crate::shared::components::{
    stagger_delay, ButtonVariant, CardAnimated, ProductCard, WhatsAppButton,
};
use crate::shared::head::use_page_meta;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::catalog::featured_products;
use contracts::domain::a001_product::Product;
use contracts::enums::Locale;
use contracts::order::OrderIntent;
use contracts::shared::i18n::TextKey;
use contracts::shared::number_format::format_price_plain;
use contracts::shared::seo::{page_meta, SitePage};
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURED_COUNT: usize = 3;
const SHOWCASE_COUNT: usize = 4;

/// Заказ всей коллекции из первого экрана
const HERO_INQUIRY: OrderIntent<'static> = OrderIntent::Inquiry {
    name: "BEN FARES Collection",
    price: 149.0,
};

const CTA_INQUIRY: OrderIntent<'static> = OrderIntent::Inquiry {
    name: "BEN FARES Fragrances",
    price: 49.0,
};

/// (иконка, заголовок, текст); блок только на английском
const PERFUME_ADVANTAGES: [(&str, &str, &str); 4] = [
    (
        "crown",
        "Royal Heritage",
        "Inspired by Moroccan royal palaces and ancient perfuming traditions spanning centuries.",
    ),
    (
        "droplet",
        "Premium Concentration",
        "High fragrance concentration ensures long-lasting scent that develops throughout the day.",
    ),
    (
        "zap",
        "Sensory Experience",
        "Multi-layered fragrance profiles that reveal different notes as they evolve on your skin.",
    ),
    (
        "shield",
        "Quality Assured",
        "Each bottle is tested rigorously to meet our premium standards and your satisfaction.",
    ),
];

const ADVANTAGES: [(&str, TextKey, TextKey); 3] = [
    ("sparkles", TextKey::HomeCraftedQuality, TextKey::HomeCraftedQualityDesc),
    ("heart", TextKey::HomeLongLasting, TextKey::HomeLongLastingDesc),
    ("check", TextKey::HomeEthicallySourced, TextKey::HomeEthicallySourcedDesc),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_locale();
    use_page_meta(|| page_meta(SitePage::Home, site_config()));

    let featured = featured_products(catalog(), FEATURED_COUNT);

    view! {
        <div class="page page--home" dir=move || i18n.dir()>
            <section class="hero">
                <p class="hero__tagline">{move || i18n.t(TextKey::HomeTagline)}</p>
                <h1 class="hero__title">
                    {move || i18n.t(TextKey::HomeTitle)}
                    " "
                    <span class="text-gold">{move || i18n.t(TextKey::HomeSubtitle)}</span>
                </h1>
                <p class="hero__description">{move || i18n.t(TextKey::HomeDescription)}</p>
                <div class="hero__actions">
                    <WhatsAppButton intent=HERO_INQUIRY variant=ButtonVariant::Primary />
                    <A href="/shop" attr:class="btn btn--outline">
                        {move || i18n.t(TextKey::HomeExploreBtn)}
                    </A>
                </div>
            </section>

            <LuxuryShowcase />

            <section class="advantages">
                {ADVANTAGES.into_iter().enumerate().map(|(index, (icon_name, title, desc))| view! {
                    <CardAnimated delay_ms=stagger_delay(index) class="advantage">
                        <div class="advantage__icon">{icon(icon_name)}</div>
                        <h3>{move || i18n.t(title)}</h3>
                        <p>{move || i18n.t(desc)}</p>
                    </CardAnimated>
                }).collect_view()}
            </section>

            <PerfumeAdvantages />

            <section class="featured">
                <h2 class="section-title">
                    {move || i18n.t(TextKey::HomeFeaturedCollection)}
                    " "
                    <span class="text-gold">{move || i18n.t(TextKey::HomeFeaturedCollectionSub)}</span>
                </h2>
                <div class="product-grid">
                    {featured.into_iter().enumerate().map(|(index, product)| view! {
                        <ProductCard product=product delay_ms=stagger_delay(index) />
                    }).collect_view()}
                </div>
                <div class="featured__more">
                    <A href="/shop" attr:class="btn btn--outline">
                        {move || i18n.t(TextKey::HomeViewAllProducts)}
                    </A>
                </div>
            </section>

            <section class="cta">
                <h2 class="section-title">
                    {move || i18n.t(TextKey::HomeReadyExperience)}
                    " "
                    <span class="text-gold">{move || i18n.t(TextKey::HomeReadyExperienceSub)}</span>
                </h2>
                <p>{move || i18n.t(TextKey::HomeOrderDirectly)}</p>
                <WhatsAppButton intent=CTA_INQUIRY variant=ButtonVariant::Secondary />
            </section>
        </div>
    }
}

/// Первые товары каталога крупными карточками
#[component]
fn LuxuryShowcase() -> impl IntoView {
    let i18n = use_locale();
    let products = featured_products(catalog(), SHOWCASE_COUNT);

    view! {
        <section class="showcase" dir=move || i18n.dir()>
            <header class="showcase__header">
                <p class="showcase__tagline">"✦ Our Exclusive Collection ✦"</p>
                <h2 class="section-title">"Handcrafted Fragrances"</h2>
                <p class="showcase__description">
                    "Each BEN FARES fragrance is meticulously crafted with 50ML premium bottles, \
                     inspired by the mystique of Morocco and the essence of oriental luxury."
                </p>
            </header>
            <div class="showcase__grid">
                {products.into_iter().enumerate().map(|(index, product)| view! {
                    <ShowcaseItem product=product delay_ms=stagger_delay(index) />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ShowcaseItem(product: &'static Product, delay_ms: u32) -> impl IntoView {
    let name = product.name(Locale::En);
    let style = format!("animation: card-appear 0.8s ease-out {}ms both;", delay_ms);

    view! {
        <div class="showcase__item" style=style>
            <img src=product.image_ref.clone() alt=name />
            <div class="showcase__overlay">
                <p class="showcase__name">{name}</p>
                <p class="showcase__text">{product.short_description.clone()}</p>
                <p class="showcase__price">{format!("{} DH", format_price_plain(product.price))}</p>
            </div>
        </div>
    }
}

#[component]
fn PerfumeAdvantages() -> impl IntoView {
    view! {
        <section class="perfume-advantages">
            <h2 class="section-title">
                "Why Choose " <span class="text-gold">"Our Fragrances"</span>
            </h2>
            <p class="section-subtitle">
                "Experience the difference of premium Moroccan perfume craftsmanship"
            </p>
            <div class="perfume-advantages__grid">
                {PERFUME_ADVANTAGES.into_iter().enumerate().map(|(index, (icon_name, title, text))| view! {
                    <CardAnimated delay_ms=stagger_delay(index) class="perfume-advantage">
                        <div class="perfume-advantage__icon">{icon(icon_name)}</div>
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::order::{build_order_url, render_order_message};
    use contracts::shared::config::load_config;

    #[test]
    fn test_home_inquiries_prefill_order_message() {
        let config = load_config().unwrap();

        let hero = HERO_INQUIRY.order_url(Locale::En, &config);
        let expected = build_order_url(
            "212600000000",
            &render_order_message(Locale::En, "BEN FARES Collection", 149.0),
        );
        assert_eq!(hero, expected);
        assert!(hero.starts_with("https://wa.me/212600000000?text="));

        let cta = CTA_INQUIRY.order_url(Locale::Fr, &config);
        let expected = build_order_url(
            "212600000000",
            &render_order_message(Locale::Fr, "BEN FARES Fragrances", 49.0),
        );
        assert_eq!(cta, expected);
    }

    #[test]
    fn test_showcase_takes_first_four_products() {
        let ids: Vec<u32> = featured_products(catalog(), SHOWCASE_COUNT)
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_perfume_advantages() {
        let titles: Vec<&str> = PERFUME_ADVANTAGES.iter().map(|(_, title, _)| *title).collect();
        assert_eq!(
            titles,
            vec!["Royal Heritage", "Premium Concentration", "Sensory Experience", "Quality Assured"]
        );
    }
}
