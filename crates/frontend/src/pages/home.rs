use leptos::prelude::*;

use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::{CardAnimated, HeroCarousel, OptimizedImage, PageHeader};
use crate::shared::content::{about, destinations, tips, DESTINATIONS, HERO_SLIDES, TRAVEL_TIPS};
use crate::shared::language::use_language;

/// How many destinations the landing page previews.
const PREVIEW_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="page page--home">
            <HeroCarousel slides=&HERO_SLIDES />

            <section class="section about-teaser">
                <PageHeader title=about::TITLE subtitle=about::SUBTITLE />
                <p>{move || lang.text(&about::DESCRIPTION)}</p>
                <a href="/about" class="btn-secondary">{move || lang.text(&about::CTA)}</a>
            </section>

            <section class="section destinations-preview">
                <PageHeader title=destinations::TITLE subtitle=destinations::SUBTITLE />
                <div class="card-grid">
                    {DESTINATIONS.iter().take(PREVIEW_COUNT).enumerate().map(|(i, destination)| view! {
                        <CardAnimated delay_ms=stagger_delay(i) class="destination-card">
                            <OptimizedImage src=destination.image alt=destination.name />
                            <h3>{move || lang.text(&destination.name)}</h3>
                            <p>{move || lang.text(&destination.description)}</p>
                            <a href="/destinations" class="destination-card__link">
                                {move || lang.text(&destinations::DISCOVER)}
                            </a>
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>

            <section class="section travel-tips">
                <PageHeader title=tips::TITLE subtitle=tips::SUBTITLE />
                <div class="card-grid card-grid--tips">
                    {TRAVEL_TIPS.iter().enumerate().map(|(i, tip)| view! {
                        <CardAnimated delay_ms=stagger_delay(i) class="tip-card">
                            <span class="tip-card__icon">{tip.icon}</span>
                            <h3>{move || lang.text(&tip.title)}</h3>
                            <p>{move || lang.text(&tip.content)}</p>
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
