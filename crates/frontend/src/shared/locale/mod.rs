//! Выбор языка сайта.
//!
//! Язык хранится в localStorage; неизвестное сохранённое значение
//! приводится к языку по умолчанию через `resolve_locale`.

use crate::shared::catalog::site_config;
use crate::shared::icons::icon;
use crate::shared::storage::{load_item, save_item};
use contracts::enums::Locale;
use contracts::order::resolve_locale;
use contracts::shared::i18n::{translate, TextKey};
use leptos::prelude::*;
use web_sys::window;

const LOCALE_STORAGE_KEY: &str = "app-locale";

fn load_locale_from_storage() -> Locale {
    match load_item(LOCALE_STORAGE_KEY) {
        Some(code) => resolve_locale(&code),
        None => site_config().default_locale(),
    }
}

/// Атрибуты `lang` и `dir` на `<html>`
fn apply_locale(locale: Locale) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("lang", locale.code());
    let _ = root.set_attribute("dir", locale.direction().as_str());
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn set_locale(&self, locale: Locale) {
        log::debug!("locale changed to '{}'", locale);
        self.locale.set(locale);
        save_item(LOCALE_STORAGE_KEY, locale.code());
        apply_locale(locale);
    }

    pub fn get(&self) -> Locale {
        self.locale.get()
    }

    /// Строка интерфейса на текущем языке (реактивно)
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.locale.get(), key)
    }

    /// Значение атрибута `dir` для контейнеров страниц
    pub fn dir(&self) -> &'static str {
        self.locale.get().direction().as_str()
    }
}

#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let initial_locale = load_locale_from_storage();
    apply_locale(initial_locale);

    provide_context(LocaleContext {
        locale: RwSignal::new(initial_locale),
    });

    children()
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Выпадающий список языков
#[component]
pub fn LocaleSwitcher() -> impl IntoView {
    let ctx = use_locale();
    let is_open = RwSignal::new(false);

    let select_locale = move |locale: Locale| {
        ctx.set_locale(locale);
        is_open.set(false);
    };

    view! {
        <div class="locale-switcher">
            <button
                class="locale-switcher__toggle"
                aria-label=move || ctx.t(TextKey::Language)
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon("globe")}
                <span class="locale-switcher__code">{move || ctx.get().code().to_uppercase()}</span>
            </button>

            <Show when=move || is_open.get()>
                <div class="locale-switcher__dropdown">
                    {Locale::all().into_iter().map(|locale| {
                        let is_active = move || ctx.get() == locale;
                        view! {
                            <button
                                class=move || if is_active() {
                                    "locale-switcher__item locale-switcher__item--active"
                                } else {
                                    "locale-switcher__item"
                                }
                                on:click=move |_| select_locale(locale)
                            >
                                {locale.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
