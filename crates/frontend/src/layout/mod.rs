pub mod footer;
pub mod header;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use footer::{FloatingWhatsApp, Footer};
use header::Navbar;

/// Site shell: navbar, routed page, footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |              <main> page                 |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    // Scroll to top on navigation
    Effect::new(move |_| {
        pathname.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="site-layout">
            <Navbar />
            <main class="site-main">{children()}</main>
            <Footer />
            <FloatingWhatsApp />
        </div>
    }
}
