use crate::shared::catalog::{catalog, site_config};
use crate::shared::components::{stagger_delay, CategoryFilter, ProductCard};
use crate::shared::head::use_page_meta;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::catalog::filter_by_category;
use contracts::enums::Category;
use contracts::shared::i18n::TextKey;
use contracts::shared::seo::{page_meta, SitePage};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

/// Категория из параметра `?category=`; неизвестное значение = все товары
fn category_from_query(value: Option<&str>) -> Option<Category> {
    value.and_then(Category::from_slug)
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let i18n = use_locale();
    let query = use_query_map();

    let selected = RwSignal::new(None::<Category>);
    let view_mode = RwSignal::new(ViewMode::Grid);

    // Синхронизация с адресом (переход по ссылке из подвала на открытой странице)
    Effect::new(move |_| {
        let raw = query.with(|q| q.get("category").map(|value| value.to_string()));
        selected.set(category_from_query(raw.as_deref()));
    });

    use_page_meta(move || page_meta(SitePage::Shop(selected.get()), site_config()));

    let filtered = Memo::new(move |_| filter_by_category(catalog(), selected.get()));
    let total = catalog().len();

    let mode_button = move |mode: ViewMode, icon_name: &'static str| {
        view! {
            <button
                class=move || if view_mode.get() == mode {
                    "view-toggle__btn view-toggle__btn--active"
                } else {
                    "view-toggle__btn"
                }
                on:click=move |_| view_mode.set(mode)
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="page page--shop" dir=move || i18n.dir()>
            <header class="page-header">
                <span class="page-header__mark">"✦"</span>
                <h1 class="page-header__title">
                    {move || i18n.t(TextKey::ShopTitle)}
                    " "
                    <span class="text-gold">{move || i18n.t(TextKey::ShopTitleSub)}</span>
                </h1>
                <p class="page-header__subtitle">{move || i18n.t(TextKey::ShopDescription)}</p>
            </header>

            <CategoryFilter active=selected />

            <div class="shop-toolbar">
                <p class="shop-toolbar__count">
                    {move || i18n.t(TextKey::ShopShowing)}
                    " "
                    <strong>{move || filtered.with(|products| products.len())}</strong>
                    " "
                    {move || i18n.t(TextKey::ShopOf)}
                    " "
                    <strong>{total}</strong>
                    " "
                    {move || i18n.t(TextKey::ShopProducts)}
                </p>
                <div class="view-toggle">
                    {mode_button(ViewMode::Grid, "grid")}
                    {mode_button(ViewMode::List, "list")}
                </div>
            </div>

            <Show
                when=move || filtered.with(|products| !products.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <p class="empty-state__icon">"🌹"</p>
                        <p>{move || i18n.t(TextKey::ShopNotFound)}</p>
                    </div>
                }
            >
                <div class=move || match view_mode.get() {
                    ViewMode::Grid => "product-grid",
                    ViewMode::List => "product-list",
                }>
                    {move || {
                        let list_mode = view_mode.get() == ViewMode::List;
                        filtered
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| view! {
                                <ProductCard product=product delay_ms=stagger_delay(index) list_mode=list_mode />
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_query() {
        assert_eq!(category_from_query(Some("men")), Some(Category::Men));
        assert_eq!(category_from_query(Some("luxury")), Some(Category::Luxury));
        assert_eq!(category_from_query(Some("unisex")), None);
        assert_eq!(category_from_query(Some("Men")), None);
        assert_eq!(category_from_query(None), None);
    }
}
