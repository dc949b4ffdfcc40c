//! Screen-reader announcements
//!
//! Announcements are injected as an explicit collaborator: the app root
//! provides an `Announcer`, pages grab it with `use_announcer` and fire
//! one-way notifications. `LiveRegion` is the single polite `aria-live`
//! outlet that voices them.

use dioxus::prelude::*;

/// Handle for posting polite screen-reader announcements.
#[derive(Clone, Copy, PartialEq)]
pub struct Announcer {
    message: Signal<String>,
}

impl Announcer {
    pub fn new() -> Self {
        Self {
            message: Signal::new(String::new()),
        }
    }

    /// Queue an announcement. Fire-and-forget: there is no acknowledgment.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.message.set(message.into());
    }
}

/// Grab the announcer provided at the app root.
pub fn use_announcer() -> Announcer {
    use_context::<Announcer>()
}

/// Visually-hidden polite live region that voices announcements.
#[component]
pub fn LiveRegion() -> Element {
    let message = use_announcer().message;

    rsx! {
        div {
            class: "sr-only",
            role: "status",
            aria_live: "polite",
            "{message}"
        }
    }
}
