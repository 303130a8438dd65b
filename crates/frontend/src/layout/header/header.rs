use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::content::{footer, nav};
use crate::shared::icons::icon;
use crate::shared::language::{use_language, LanguageToggle};
use crate::shared::theme::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    let lang = use_language();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Мобильное меню закрывается при переходе на другую страницу
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let is_active = move |path: &str| pathname.with(|current| current == path);

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">{move || lang.text(&footer::ABOUT)}</a>

            <div class=move || if menu_open.get() { "navbar__links open" } else { "navbar__links" }>
                {nav::LINKS.iter().map(|(path, label)| {
                    let path: &'static str = path;
                    view! {
                        <a
                            href=path
                            class=move || if is_active(path) { "nav-link active" } else { "nav-link" }
                        >
                            {move || lang.text(label)}
                        </a>
                    }
                }).collect_view()}
                <a href="/contact" class="btn-primary navbar__cta">{move || lang.text(&nav::BOOK)}</a>
            </div>

            <div class="navbar__actions">
                <LanguageToggle />
                <ThemeToggle />
                <button
                    class="navbar-icon-btn navbar__menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    aria-label="Menu"
                >
                    {move || if menu_open.get() { icon("close") } else { icon("menu") }}
                </button>
            </div>
        </nav>
    }
}
