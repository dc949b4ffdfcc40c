//! Vitals Console - CSR frontend
//!
//! Architecture:
//! - Pure CSR rendering (no SSR/LiveView/Server Functions)
//! - API calls go to the backend health endpoint (same origin)
//! - The presentation engine in `view` is pure and holds no state

mod api;
mod components;
mod config;
mod view;

use components::{Home, LiveRegion, Navbar, NotFound, SystemHealth};
use dioxus::prelude::*;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ROUTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/health")]
        SystemHealth {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ASSETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const MAIN_CSS: Asset = asset!("/assets/main.css");

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// APP ENTRY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(components::Announcer::new);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        // Tailwind utility classes via CDN
        document::Script { src: "https://cdn.tailwindcss.com" }

        LiveRegion {}
        Router::<Route> {}
    }
}
