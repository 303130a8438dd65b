pub mod api;
pub mod step_form;

use leptos::prelude::*;

use crate::shared::components::Faq;
use crate::shared::content::{contact, social};
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use step_form::StepForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="page page--contact">
            <section class="contact-hero">
                <span class="contact-hero__tagline">{move || lang.text(&contact::TAGLINE)}</span>
                <h1>{move || lang.text(&contact::TITLE)}</h1>
                <p>{move || lang.text(&contact::SUBTITLE)}</p>
            </section>

            <div class="contact-layout">
                <StepForm />

                <aside class="contact-info">
                    <a class="contact-info__card" href=contact::MAPS_URL target="_blank" rel="noopener">
                        {icon("map-pin")}
                        <span>{move || lang.text(&contact::ADDRESS)}</span>
                    </a>
                    <a class="contact-info__card" href=format!("mailto:{}", contact::EMAIL)>
                        {icon("mail")}
                        <span>{contact::EMAIL}</span>
                    </a>
                    <a class="contact-info__card" href=social::WHATSAPP target="_blank" rel="noopener">
                        {icon("message")}
                        <span dir="ltr">{contact::PHONE}</span>
                    </a>
                </aside>
            </div>

            <Faq />
        </div>
    }
}
