use crate::routes::routes::AppRoutes;
use crate::shared::locale::LocaleProvider;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <LocaleProvider>
                <AppRoutes />
            </LocaleProvider>
        </ThemeProvider>
    }
}
