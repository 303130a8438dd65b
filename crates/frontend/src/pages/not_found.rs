use leptos::prelude::*;

use crate::shared::content::not_found;
use crate::shared::language::use_language;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="page page--not-found">
            <span class="not-found__code">"404"</span>
            <h1>{move || lang.text(&not_found::TITLE)}</h1>
            <p>{move || lang.text(&not_found::BODY)}</p>
            <a href="/" class="btn-primary">{move || lang.text(&not_found::BACK_HOME)}</a>
        </div>
    }
}
