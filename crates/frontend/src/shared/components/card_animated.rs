//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `style.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! // С каскадной задержкой для stagger-эффекта в сетке товаров
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=100> // карточка 2
//! <CardAnimated delay_ms=200> // карточка 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками в сетке
pub const STAGGER_STEP_MS: u32 = 100;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
///
/// # Props
/// - `delay_ms`: задержка анимации в мс (по умолчанию `0`).
/// - `class`: дополнительные CSS-классы карточки.
/// - `children`: содержимое карточки.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные CSS-классы.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.5s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card-luxury".to_string()
    } else {
        format!("card-luxury {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

/// Задержка для карточки с индексом `index` в сетке
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}
