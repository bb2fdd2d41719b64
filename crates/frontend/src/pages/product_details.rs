use crate::shared::catalog::{catalog, site_config};
use crate::shared::components::{stagger_delay, ButtonVariant, ProductCard, WhatsAppButton};
use crate::shared::head::use_page_meta;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::catalog::{find_by_id_str, related_products};
use contracts::domain::a001_product::Product;
use contracts::order::OrderIntent;
use contracts::shared::i18n::{category_label, TextKey};
use contracts::shared::number_format::format_price_with_currency;
use contracts::shared::seo::{not_found_meta, product_meta};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

const RELATED_LIMIT: usize = 3;

const QUALITY_BADGES: [TextKey; 4] = [
    TextKey::ProductPremiumQuality,
    TextKey::ProductLongLastingFormula,
    TextKey::ProductEthicallySourced,
    TextKey::ProductLuxuryPackaging,
];

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let i18n = use_locale();
    let params = use_params_map();

    let product = Memo::new(move |_| {
        params
            .with(|p| p.get("id").map(|id| id.to_string()))
            .and_then(|id| find_by_id_str(catalog(), &id))
    });

    use_page_meta(move || match product.get() {
        Some(p) => product_meta(p, i18n.get(), site_config()),
        None => not_found_meta(site_config()),
    });

    move || match product.get() {
        Some(p) => view! { <ProductDetails product=p /> }.into_any(),
        None => view! { <ProductNotFound /> }.into_any(),
    }
}

#[component]
fn ProductDetails(product: &'static Product) -> impl IntoView {
    let i18n = use_locale();
    let related = related_products(catalog(), product, RELATED_LIMIT);
    let name = move || product.name(i18n.get());

    view! {
        <div class="page page--product" dir=move || i18n.dir()>
            <A href="/shop" attr:class="back-link">
                {icon("chevron-left")}
                <span>{move || i18n.t(TextKey::ProductBackToShop)}</span>
            </A>

            <div class="product-details">
                <div class="product-details__image">
                    <img src=product.image_ref.clone() alt=name />
                </div>

                <div class="product-details__info">
                    <span class="product-details__category">
                        {move || category_label(i18n.get(), product.category)}
                    </span>
                    <h1 class="product-details__title">{name}</h1>

                    <div class="product-details__price">
                        <span class="label">{move || i18n.t(TextKey::ProductPrice)}</span>
                        <span class="value">
                            {move || format_price_with_currency(i18n.get(), product.price)}
                        </span>
                    </div>

                    <section>
                        <h3>{move || i18n.t(TextKey::ProductDescription)}</h3>
                        <p>{product.long_description.clone()}</p>
                    </section>

                    <section>
                        <h3>{move || i18n.t(TextKey::ProductFragranceNotes)}</h3>
                        <p class="product-details__notes">{product.fragrance_notes.clone()}</p>
                    </section>

                    <ul class="product-details__badges">
                        {QUALITY_BADGES.into_iter().map(|key| view! {
                            <li>
                                {icon("check")}
                                <span>{move || i18n.t(key)}</span>
                            </li>
                        }).collect_view()}
                    </ul>

                    <WhatsAppButton
                        intent=OrderIntent::Product(product)
                        variant=ButtonVariant::Primary
                        class="whatsapp-btn--large"
                    />
                </div>
            </div>

            {(!related.is_empty()).then(|| view! {
                <section class="related">
                    <h2 class="section-title">{move || i18n.t(TextKey::ProductYouMayAlsoLike)}</h2>
                    <div class="product-grid">
                        {related.into_iter().enumerate().map(|(index, item)| view! {
                            <ProductCard product=item delay_ms=stagger_delay(index) />
                        }).collect_view()}
                    </div>
                </section>
            })}
        </div>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <div class="page page--not-found" dir=move || i18n.dir()>
            <p class="empty-state__icon">"🌹"</p>
            <h1>{move || i18n.t(TextKey::ProductNotFound)}</h1>
            <A href="/shop" attr:class="btn btn--primary">
                {move || i18n.t(TextKey::ProductContinueShopping)}
            </A>
        </div>
    }
}
