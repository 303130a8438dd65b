use contracts::shared::Bilingual;
use leptos::prelude::*;

use crate::shared::language::use_language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// `<img>` with a loading skeleton and an error placeholder.
///
/// Lazy loaded unless `priority` is set (hero images).
#[component]
pub fn OptimizedImage(
    src: &'static str,
    alt: Bilingual,
    #[prop(optional, into)]
    class: String,
    #[prop(optional)]
    priority: bool,
) -> impl IntoView {
    let lang = use_language();
    let state = RwSignal::new(LoadState::Loading);

    view! {
        <div class=format!("optimized-image {class}")>
            <Show when=move || state.get() == LoadState::Loading>
                <div class="optimized-image__skeleton"></div>
            </Show>
            <Show when=move || state.get() == LoadState::Failed>
                <div class="optimized-image__error">
                    {crate::shared::icons::icon("image-off")}
                </div>
            </Show>
            <img
                src=src
                alt=move || lang.text(&alt)
                loading=if priority { "eager" } else { "lazy" }
                decoding=if priority { "sync" } else { "async" }
                class=move || if state.get() == LoadState::Loaded { "is-loaded" } else { "is-loading" }
                on:load=move |_| state.set(LoadState::Loaded)
                on:error=move |_| {
                    log::warn!("Image failed to load: {}", src);
                    state.set(LoadState::Failed);
                }
            />
        </div>
    }
}
