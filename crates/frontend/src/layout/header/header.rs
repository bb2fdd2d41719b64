use crate::shared::icons::icon;
use crate::shared::locale::{use_locale, LocaleSwitcher};
use crate::shared::theme::ThemeToggle;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;
use leptos_router::components::A;

/// Пункты меню: адрес и ключ подписи
pub const NAV_LINKS: [(&str, TextKey); 4] = [
    ("/", TextKey::NavHome),
    ("/shop", TextKey::NavShop),
    ("/about", TextKey::NavAbout),
    ("/contact", TextKey::NavContact),
];

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_locale();
    let menu_open = RwSignal::new(false);

    let links = move |on_navigate: bool| {
        NAV_LINKS
            .into_iter()
            .map(|(path, key)| {
                view! {
                    <A
                        href=path
                        attr:class="navbar__link"
                        on:click=move |_| {
                            if on_navigate {
                                menu_open.set(false);
                            }
                        }
                    >
                        {move || i18n.t(key)}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav data-zone="header" class="navbar" dir=move || i18n.dir()>
            <div class="navbar__content">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__brand-mark">"✦"</span>
                    <span class="navbar__brand-name">"BEN FARES"</span>
                </A>

                <div class="navbar__links">
                    {links(false)}
                    <ThemeToggle />
                    <LocaleSwitcher />
                </div>

                <div class="navbar__mobile-actions">
                    <ThemeToggle />
                    <button
                        class="navbar__icon-btn"
                        aria-label="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icon("close") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile-menu">
                    {links(true)}
                    <LocaleSwitcher />
                </div>
            </Show>
        </nav>
    }
}
