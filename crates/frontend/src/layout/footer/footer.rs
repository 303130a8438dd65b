use leptos::prelude::*;

use crate::shared::content::{contact, footer, nav, social};
use crate::shared::icons::icon;
use crate::shared::language::use_language;

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_language();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__about">
                    <h3>{move || lang.text(&footer::ABOUT)}</h3>
                    <p>{move || lang.text(&footer::DESCRIPTION)}</p>
                    <div class="site-footer__social">
                        <a href=social::INSTAGRAM target="_blank" rel="noopener">"Instagram"</a>
                        <a href=social::FACEBOOK target="_blank" rel="noopener">"Facebook"</a>
                        <a href=social::TWITTER target="_blank" rel="noopener">"X"</a>
                    </div>
                </div>

                <div class="site-footer__links">
                    <h4>{move || lang.text(&footer::QUICK_LINKS)}</h4>
                    <ul>
                        {nav::LINKS.iter().map(|(path, label)| {
                            let path: &'static str = path;
                            view! { <li><a href=path>{move || lang.text(label)}</a></li> }
                        }).collect_view()}
                        <li><a href="/privacy">{move || lang.text(&crate::shared::content::legal::PRIVACY_TITLE)}</a></li>
                        <li><a href="/terms">{move || lang.text(&crate::shared::content::legal::TERMS_TITLE)}</a></li>
                    </ul>
                </div>

                <div class="site-footer__contact">
                    <h4>{move || lang.text(&footer::CONTACT)}</h4>
                    <p>{icon("map-pin")} {move || lang.text(&contact::ADDRESS)}</p>
                    <p dir="ltr">{contact::PHONE}</p>
                    <p>{icon("mail")} <a href=format!("mailto:{}", contact::EMAIL)>{contact::EMAIL}</a></p>
                </div>
            </div>
            <div class="site-footer__copyright">{move || lang.text(&footer::COPYRIGHT)}</div>
        </footer>
    }
}
