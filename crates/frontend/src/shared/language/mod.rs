//! Language context.
//!
//! Arabic by default. The choice is persisted in localStorage and mirrored to
//! `<html lang dir>` so the whole document flips between RTL and LTR.

use contracts::shared::{Bilingual, Language};
use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage;

const LANGUAGE_STORAGE_KEY: &str = "site-language";

fn load_language_from_storage() -> Language {
    storage::load(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Set `lang` and `dir` on the document element.
fn apply_language(language: Language) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("lang", language.code());
    let _ = root.set_attribute("dir", language.dir().as_str());
}

#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        storage::save(LANGUAGE_STORAGE_KEY, language.code());
        apply_language(language);
        log::debug!("Language switched to {}", language.code());
    }

    pub fn get(&self) -> Language {
        self.language.get()
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }

    /// Reactive lookup of a bilingual string.
    pub fn text(&self, text: &Bilingual) -> &'static str {
        text.get(self.language.get())
    }
}

#[component]
pub fn LanguageProvider(children: Children) -> impl IntoView {
    let initial = load_language_from_storage();
    apply_language(initial);

    provide_context(LanguageContext {
        language: RwSignal::new(initial),
    });

    children()
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .expect("LanguageContext not found. Wrap your app with LanguageProvider.")
}

/// Navbar button switching between العربية and English.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let ctx = use_language();

    view! {
        <button
            class="navbar-icon-btn language-toggle"
            on:click=move |_| ctx.toggle()
            title=move || match ctx.get() {
                Language::Ar => "Switch to English",
                Language::En => "التبديل إلى العربية",
            }
        >
            {crate::shared::icons::icon("globe")}
            <span>{move || match ctx.get() {
                Language::Ar => "EN",
                Language::En => "ع",
            }}</span>
        </button>
    }
}
