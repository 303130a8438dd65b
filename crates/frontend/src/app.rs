use crate::routes::routes::AppRoutes;
use crate::shared::language::LanguageProvider;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LanguageProvider>
            <ThemeProvider>
                <AppRoutes />
            </ThemeProvider>
        </LanguageProvider>
    }
}
