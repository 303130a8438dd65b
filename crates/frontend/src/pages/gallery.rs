use leptos::prelude::*;

use crate::shared::components::hero_carousel::{next_index, prev_index};
use crate::shared::components::{OptimizedImage, PageHeader};
use crate::shared::content::{gallery, DESTINATIONS};
use crate::shared::icons::icon;
use crate::shared::language::use_language;

/// Lightbox state after a key press: Escape closes, arrows move with wrap-around.
pub fn lightbox_after_key(key: &str, open: Option<usize>, len: usize) -> Option<usize> {
    let current = open?;
    match key {
        "Escape" => None,
        "ArrowLeft" => Some(prev_index(current, len)),
        "ArrowRight" => Some(next_index(current, len)),
        _ => Some(current),
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let lang = use_language();
    let open = RwSignal::new(Option::<usize>::None);
    let len = DESTINATIONS.len();

    let show_prev = move || open.update(|o| *o = o.map(|i| prev_index(i, len)));
    let show_next = move || open.update(|o| *o = o.map(|i| next_index(i, len)));

    // Клавиатура работает без фокуса на лайтбоксе
    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        let Some(current) = open.try_get_untracked() else {
            return;
        };
        let next = lightbox_after_key(&ev.key(), current, len);
        if next != current {
            let _ = open.try_set(next);
        }
    });
    on_cleanup(move || keys.remove());

    view! {
        <div class="page page--gallery">
            <PageHeader title=gallery::TITLE subtitle=gallery::SUBTITLE primary=true />

            <div class="gallery-grid">
                {DESTINATIONS.iter().enumerate().map(|(i, item)| view! {
                    <button class="gallery-grid__item" on:click=move |_| open.set(Some(i))>
                        <OptimizedImage src=item.image alt=item.name />
                        <span class="gallery-grid__caption">{move || lang.text(&item.name)}</span>
                    </button>
                }).collect_view()}
            </div>

            {move || open.get().map(|i| {
                let item = &DESTINATIONS[i];
                view! {
                    <div class="lightbox" on:click=move |_| open.set(None)>
                        <button class="lightbox__close" aria-label="Close">{icon("close")}</button>
                        <button
                            class="lightbox__nav lightbox__nav--prev"
                            on:click=move |ev| { ev.stop_propagation(); show_prev(); }
                        >
                            {icon("chevron-left")}
                        </button>
                        <figure on:click=|ev| ev.stop_propagation()>
                            <OptimizedImage src=item.image alt=item.name priority=true />
                            <figcaption>{move || lang.text(&item.name)}</figcaption>
                        </figure>
                        <button
                            class="lightbox__nav lightbox__nav--next"
                            on:click=move |ev| { ev.stop_propagation(); show_next(); }
                        >
                            {icon("chevron-right")}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_keys() {
        assert_eq!(lightbox_after_key("Escape", Some(2), 6), None);
        assert_eq!(lightbox_after_key("ArrowRight", Some(5), 6), Some(0));
        assert_eq!(lightbox_after_key("ArrowLeft", Some(0), 6), Some(5));
        assert_eq!(lightbox_after_key("Enter", Some(3), 6), Some(3));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        assert_eq!(lightbox_after_key("ArrowRight", None, 6), None);
        assert_eq!(lightbox_after_key("Escape", None, 6), None);
    }
}
