use leptos::prelude::*;

use crate::shared::content::social;
use crate::shared::icons::icon;

/// Page offset after which the button appears.
const SHOW_AFTER_PX: f64 = 300.0;

/// WhatsApp shortcut shown once the visitor has scrolled down.
#[component]
pub fn FloatingWhatsApp() -> impl IntoView {
    let visible = RwSignal::new(false);

    // Кнопка живёт всё время работы приложения, отписка не нужна
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let _ = visible.try_set(offset > SHOW_AFTER_PX);
    });

    view! {
        <Show when=move || visible.get()>
            <a
                class="floating-whatsapp"
                href=social::WHATSAPP
                target="_blank"
                rel="noopener"
                aria-label="WhatsApp"
            >
                {icon("message")}
            </a>
        </Show>
    }
}
