use leptos::prelude::*;

use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::{CardAnimated, OptimizedImage, PageHeader};
use crate::shared::content::{destinations, find_destination, DESTINATIONS};
use crate::shared::icons::icon;
use crate::shared::language::use_language;

/// Destination grid; "Discover" opens the full story in a modal.
#[component]
pub fn DestinationsPage() -> impl IntoView {
    let lang = use_language();
    let selected = RwSignal::new(Option::<u32>::None);

    view! {
        <div class="page page--destinations">
            <PageHeader title=destinations::TITLE subtitle=destinations::SUBTITLE primary=true />

            <div class="card-grid">
                {DESTINATIONS.iter().enumerate().map(|(i, destination)| {
                    let id = destination.id;
                    view! {
                        <CardAnimated delay_ms=stagger_delay(i) class="destination-card">
                            <OptimizedImage src=destination.image alt=destination.name />
                            <h3>{move || lang.text(&destination.name)}</h3>
                            <p>{move || lang.text(&destination.description)}</p>
                            <button class="btn-secondary" on:click=move |_| selected.set(Some(id))>
                                {move || lang.text(&destinations::DISCOVER)}
                            </button>
                        </CardAnimated>
                    }
                }).collect_view()}
            </div>

            {move || selected.get().and_then(find_destination).map(|destination| view! {
                <div class="modal-backdrop" on:click=move |_| selected.set(None)>
                    <div class="modal destination-story" on:click=|ev| ev.stop_propagation()>
                        <button
                            class="modal__close"
                            on:click=move |_| selected.set(None)
                            aria-label=move || lang.text(&destinations::CLOSE)
                        >
                            {icon("close")}
                        </button>
                        <OptimizedImage src=destination.image alt=destination.name priority=true />
                        <h2>{move || lang.text(&destination.name)}</h2>
                        <p>{move || lang.text(&destination.story)}</p>
                        <a href="/contact" class="btn-primary">
                            {move || lang.text(&crate::shared::content::nav::BOOK)}
                        </a>
                    </div>
                </div>
            })}
        </div>
    }
}
