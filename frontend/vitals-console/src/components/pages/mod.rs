//! Page component module - individual page components split for maintainability.

pub mod health;
pub mod home;

pub use health::SystemHealth;
pub use home::Home;

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "text-center py-16",
            h1 { class: "text-2xl font-bold mb-4 text-gray-900 dark:text-gray-100", "Page Not Found" }
            p { class: "text-gray-600 dark:text-gray-400 mb-8", "No page at /{path}" }
            Link { to: crate::Route::Home {}, class: "text-blue-600 dark:text-blue-400 hover:underline",
                "Go to the overview"
            }
        }
    }
}
