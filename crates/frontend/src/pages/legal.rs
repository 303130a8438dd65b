use contracts::shared::Bilingual;
use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::content::{legal, LegalSection};
use crate::shared::language::use_language;

#[component]
fn LegalPage(title: Bilingual, sections: &'static [LegalSection]) -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="page page--legal">
            <PageHeader title=title subtitle=legal::LAST_UPDATED primary=true />
            {sections.iter().map(|section| view! {
                <section class="legal-section">
                    <h2>
                        <span class="legal-section__icon">{section.icon}</span>
                        {move || lang.text(&section.title)}
                    </h2>
                    <p>{move || lang.text(&section.content)}</p>
                </section>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <LegalPage title=legal::PRIVACY_TITLE sections=&legal::PRIVACY /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage title=legal::TERMS_TITLE sections=&legal::TERMS /> }
}
