use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::Layout;
use crate::pages::{
    about::AboutPage, contact::ContactPage, destinations::DestinationsPage, gallery::GalleryPage,
    home::HomePage, legal::PrivacyPolicyPage, legal::TermsPage, not_found::NotFoundPage,
};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/destinations") view=DestinationsPage />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/privacy") view=PrivacyPolicyPage />
                    <Route path=path!("/terms") view=TermsPage />
                </Routes>
            </Layout>
        </Router>
    }
}
