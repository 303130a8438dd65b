//! Theme management module for the site.
//!
//! Light and dark themes. Theme preference is persisted in localStorage and
//! applied as the `dark` class plus `data-theme` on the document element.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for data-theme and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "site-theme";

fn load_theme_from_storage() -> Theme {
    storage::load(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    let _ = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark);
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::save(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark switch for the navbar.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="navbar-icon-btn theme-toggle"
            on:click=move |_| ctx.toggle()
            title=move || match ctx.theme.get() {
                Theme::Light => "Dark mode",
                Theme::Dark => "Light mode",
            }
        >
            {move || match ctx.theme.get() {
                Theme::Light => crate::shared::icons::icon("moon"),
                Theme::Dark => crate::shared::icons::icon("sun"),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("forest"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    }
}
