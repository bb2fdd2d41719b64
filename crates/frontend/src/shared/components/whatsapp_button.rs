use crate::shared::catalog::site_config;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::order::OrderIntent;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "whatsapp-btn whatsapp-btn--primary",
            ButtonVariant::Secondary => "whatsapp-btn whatsapp-btn--secondary",
            ButtonVariant::Outline => "whatsapp-btn whatsapp-btn--outline",
        }
    }
}

/// Кнопка заказа: открывает WhatsApp с готовым сообщением на текущем языке
#[component]
pub fn WhatsAppButton(
    intent: OrderIntent<'static>,
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let i18n = use_locale();
    let href = move || intent.order_url(i18n.get(), site_config());
    let class = format!("{} {}", variant.css_class(), class);

    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class=class>
            {icon("whatsapp")}
            <span>{move || i18n.t(TextKey::OrderOnWhatsapp)}</span>
        </a>
    }
}
