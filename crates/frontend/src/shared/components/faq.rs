use leptos::prelude::*;

use crate::shared::content::{FAQS, FAQ_TITLE};
use crate::shared::language::use_language;

/// Accordion, at most one answer open.
#[component]
pub fn Faq() -> impl IntoView {
    let lang = use_language();
    let open = RwSignal::new(Option::<usize>::None);

    view! {
        <section class="faq">
            <h2 class="faq__title">{move || lang.text(&FAQ_TITLE)}</h2>
            {FAQS.iter().enumerate().map(|(i, faq)| {
                let is_open = move || open.get() == Some(i);
                view! {
                    <div class=move || if is_open() { "faq__item open" } else { "faq__item" }>
                        <button
                            class="faq__question"
                            on:click=move |_| open.update(|o| *o = if *o == Some(i) { None } else { Some(i) })
                        >
                            {move || lang.text(&faq.question)}
                        </button>
                        <Show when=is_open>
                            <p class="faq__answer">{move || lang.text(&faq.answer)}</p>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </section>
    }
}
