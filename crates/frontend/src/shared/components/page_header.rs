use contracts::shared::Bilingual;
use leptos::prelude::*;

use crate::shared::language::use_language;

/// PageHeader component - section title with optional subtitle in the
/// current site language.
#[component]
pub fn PageHeader(
    title: Bilingual,

    #[prop(optional)]
    subtitle: Option<Bilingual>,

    /// Renders an `<h1>` instead of `<h2>`
    #[prop(optional)]
    primary: bool,
) -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="page-header">
            {if primary {
                view! { <h1 class="page-header__title">{move || lang.text(&title)}</h1> }.into_any()
            } else {
                view! { <h2 class="page-header__title">{move || lang.text(&title)}</h2> }.into_any()
            }}
            {subtitle.map(|s| view! {
                <p class="page-header__subtitle">{move || lang.text(&s)}</p>
            })}
        </div>
    }
}
