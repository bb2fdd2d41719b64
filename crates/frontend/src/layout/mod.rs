pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use web_sys::window;

/// Каркас страницы сайта.
///
/// ```text
/// +------------------------------------------+
/// |               Header (navbar)             |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
///
/// Must be rendered inside the router: scrolls to top on every path change.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("navigated to {}", path);
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
