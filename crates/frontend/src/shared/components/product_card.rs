use super::card_animated::CardAnimated;
use super::whatsapp_button::{ButtonVariant, WhatsAppButton};
use crate::shared::locale::use_locale;
use contracts::domain::a001_product::Product;
use contracts::order::OrderIntent;
use contracts::shared::i18n::{category_label, TextKey};
use contracts::shared::number_format::format_price_with_currency;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProductCard(
    product: &'static Product,
    #[prop(optional)]
    delay_ms: u32,
    /// Компактная строка вместо карточки (режим списка в магазине)
    #[prop(optional)]
    list_mode: bool,
) -> impl IntoView {
    let i18n = use_locale();
    let name = move || product.name(i18n.get());
    let path = product.detail_path();
    let class = if list_mode { "product-card product-card--list" } else { "product-card" };

    view! {
        <CardAnimated delay_ms=delay_ms class=class>
            <A href=path.clone() attr:class="product-card__image">
                <img src=product.image_ref.clone() alt=name loading="lazy" />
                <span class="product-card__badge">
                    {move || category_label(i18n.get(), product.category)}
                </span>
            </A>
            <div class="product-card__body" dir=move || i18n.dir()>
                <A href=path.clone() attr:class="product-card__title">
                    <h3>{name}</h3>
                </A>
                <p class="product-card__description">{product.short_description.clone()}</p>
                <p class="product-card__price">
                    {move || format_price_with_currency(i18n.get(), product.price)}
                </p>
                <div class="product-card__actions">
                    <WhatsAppButton intent=OrderIntent::Product(product) variant=ButtonVariant::Primary />
                    <A href=path attr:class="product-card__more">
                        {move || i18n.t(TextKey::ShopLearnMore)}
                    </A>
                </div>
            </div>
        </CardAnimated>
    }
}
