//! CardAnimated: карточка с анимацией появления.
//!
//! Анимация задаётся в CSS (`@keyframes card-appear`), компонент только
//! выставляет задержку для stagger-эффекта.
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=80>  // карточка 2
//! ```

use leptos::prelude::*;

/// Stagger step between neighbouring cards in a grid.
pub const STAGGER_MS: u32 = 80;

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card card-animated".to_string()
    } else {
        format!("card card-animated {class}")
    };

    view! {
        <div class=class style=format!("animation-delay: {delay_ms}ms;")>
            {children()}
        </div>
    }
}

/// Delay for the `index`-th card of a grid.
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_MS)
}
