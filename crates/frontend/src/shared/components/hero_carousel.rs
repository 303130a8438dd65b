use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::components::optimized_image::OptimizedImage;
use crate::shared::content::HeroSlide;
use crate::shared::language::use_language;

pub const DEFAULT_INTERVAL_MS: u32 = 6000;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// A pending auto-advance is valid only if no newer one was scheduled after it.
pub fn timer_is_current(scheduled: u64, latest: Option<u64>) -> bool {
    latest == Some(scheduled)
}

/// Rotating hero with crossfading slides.
///
/// Auto-advance is paused while the pointer is over the carousel. Every
/// index change or pause toggle bumps a generation counter; a timeout that
/// fires after a newer generation started does nothing, so each slide stays
/// for a full interval.
#[component]
pub fn HeroCarousel(
    slides: &'static [HeroSlide],
    #[prop(default = DEFAULT_INTERVAL_MS)]
    interval_ms: u32,
) -> impl IntoView {
    let lang = use_language();
    let index = RwSignal::new(0usize);
    let paused = RwSignal::new(false);
    let generation = StoredValue::new(0u64);
    let len = slides.len();

    Effect::new(move |_| {
        let current = index.get();
        let is_paused = paused.get();
        generation.update_value(|g| *g = g.wrapping_add(1));
        if is_paused || len < 2 {
            return;
        }
        let scheduled = generation.get_value();
        Timeout::new(interval_ms, move || {
            if timer_is_current(scheduled, generation.try_get_value()) {
                let _ = index.try_set(next_index(current, len));
            }
        })
        .forget();
    });

    view! {
        <section
            class="hero-carousel"
            on:mouseenter=move |_| paused.set(true)
            on:mouseleave=move |_| paused.set(false)
        >
            {slides.iter().enumerate().map(|(i, slide)| {
                view! {
                    <div class=move || if index.get() == i { "hero-slide active" } else { "hero-slide" }>
                        <OptimizedImage src=slide.image alt=slide.title priority={i == 0} class="hero-slide__image" />
                        <div class="hero-slide__overlay"></div>
                        <div class="hero-slide__content">
                            <h1>{move || lang.text(&slide.title)}</h1>
                            <p>{move || lang.text(&slide.subtitle)}</p>
                            <a class="btn-primary" href="/contact">{move || lang.text(&slide.cta)}</a>
                        </div>
                    </div>
                }
            }).collect_view()}

            <button
                class="hero-carousel__nav hero-carousel__nav--prev"
                on:click=move |_| index.update(|i| *i = prev_index(*i, len))
                aria-label="Previous slide"
            >
                {crate::shared::icons::icon("chevron-left")}
            </button>
            <button
                class="hero-carousel__nav hero-carousel__nav--next"
                on:click=move |_| index.update(|i| *i = next_index(*i, len))
                aria-label="Next slide"
            >
                {crate::shared::icons::icon("chevron-right")}
            </button>

            <div class="hero-carousel__dots">
                {(0..len).map(|i| view! {
                    <button
                        class=move || if index.get() == i { "dot active" } else { "dot" }
                        on:click=move |_| index.set(i)
                        aria-label=format!("Slide {}", i + 1)
                    ></button>
                }).collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_both_ways() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        // 0 -> 1 -> 0 by hand: the index matches again but the timer is old
        assert!(timer_is_current(3, Some(3)));
        assert!(!timer_is_current(1, Some(3)));
        // Carousel unmounted
        assert!(!timer_is_current(3, None));
    }

    #[test]
    fn test_rotation_on_empty_and_single() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
