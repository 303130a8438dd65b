use leptos::prelude::*;

use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::content::about;
use crate::shared::language::use_language;

#[component]
pub fn AboutPage() -> impl IntoView {
    let lang = use_language();
    let (mission_title, mission_text) = about::MISSION;
    let (vision_title, vision_text) = about::VISION;

    view! {
        <div class="page page--about">
            <PageHeader title=about::TITLE subtitle=about::SUBTITLE primary=true />
            <p class="page__lead">{move || lang.text(&about::DESCRIPTION)}</p>

            <div class="card-grid card-grid--two">
                <CardAnimated class="about-card">
                    <h2>{move || lang.text(&mission_title)}</h2>
                    <p>{move || lang.text(&mission_text)}</p>
                </CardAnimated>
                <CardAnimated delay_ms=stagger_delay(1) class="about-card">
                    <h2>{move || lang.text(&vision_title)}</h2>
                    <p>{move || lang.text(&vision_text)}</p>
                </CardAnimated>
            </div>

            <section class="section">
                <PageHeader title=about::VALUES_TITLE />
                <div class="card-grid">
                    {about::VALUES.iter().enumerate().map(|(i, (title, text))| view! {
                        <CardAnimated delay_ms=stagger_delay(i) class="value-card">
                            <h3>{move || lang.text(title)}</h3>
                            <p>{move || lang.text(text)}</p>
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
