use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::enums::Category;
use contracts::shared::i18n::{category_label, TextKey};
use leptos::prelude::*;

/// Кнопки фильтра: "Все" и по одной на категорию.
/// `None` в сигнале означает "все товары"
#[component]
pub fn CategoryFilter(active: RwSignal<Option<Category>>) -> impl IntoView {
    let i18n = use_locale();

    let options: Vec<Option<Category>> = std::iter::once(None)
        .chain(Category::all().into_iter().map(Some))
        .collect();

    view! {
        <div class="category-filter" dir=move || i18n.dir()>
            <div class="category-filter__header">
                {icon("filter")}
                <h3>{move || i18n.t(TextKey::ShopFilter)}</h3>
            </div>
            <div class="category-filter__buttons">
                {options.into_iter().map(|option| {
                    let label = move || match option {
                        None => i18n.t(TextKey::ShopAllProducts),
                        Some(category) => category_label(i18n.get(), category),
                    };
                    view! {
                        <button
                            class=move || if active.get() == option {
                                "category-filter__btn category-filter__btn--active"
                            } else {
                                "category-filter__btn"
                            }
                            on:click=move |_| active.set(option)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
