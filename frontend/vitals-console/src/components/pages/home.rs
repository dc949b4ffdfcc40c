//! Home page component

use crate::api::health::fetch_system_health;
use crate::view;
use crate::Route;
use dioxus::prelude::*;
use vitals_models::HealthReport;

#[component]
pub fn Home() -> Element {
    let mut loading = use_signal(|| true);
    let mut failed = use_signal(|| false);
    let mut report = use_signal(|| None::<HealthReport>);

    // One summary fetch on mount; the health page owns refresh.
    use_effect(move || {
        spawn(async move {
            match fetch_system_health().await {
                Ok(data) => report.set(Some(data)),
                Err(e) => {
                    tracing::error!("Health summary fetch failed: {e}");
                    failed.set(true);
                }
            }
            loading.set(false);
        });
    });

    let summary = view::assemble(report.read().as_ref());

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-4 text-gray-900 dark:text-gray-100", "Vitals Console" }
            p { class: "text-gray-600 dark:text-gray-400 mb-4",
                "Aggregate and per-service health for the platform backend."
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div { class: "border border-gray-200 dark:border-gray-700 rounded p-4 hover:shadow-lg transition bg-white dark:bg-gray-800",
                    h2 { class: "text-xl font-semibold mb-2 text-gray-900 dark:text-gray-100", "Quick Actions" }
                    ul { class: "space-y-2",
                        li {
                            Link { to: Route::SystemHealth {}, class: "text-blue-600 dark:text-blue-400 hover:underline",
                                "System Health"
                            }
                        }
                    }
                }
                div { class: "border border-gray-200 dark:border-gray-700 rounded p-4 bg-white dark:bg-gray-800",
                    h2 { class: "text-xl font-semibold mb-2 text-gray-900 dark:text-gray-100", "System Status" }
                    if loading() {
                        div { class: "flex items-center space-x-2",
                            div { class: "inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-blue-600 dark:border-blue-400" }
                            span { class: "text-sm text-gray-600 dark:text-gray-400", "Checking system health..." }
                        }
                    } else if failed() {
                        div { class: "flex items-center space-x-2 text-red-600 dark:text-red-400",
                            span { role: "img", aria_label: "Error", "⚠️" }
                            span { "System health check failed" }
                        }
                    } else if let Some(summary) = summary {
                        div { class: "flex items-center space-x-2",
                            span { class: "px-2 py-1 text-xs font-semibold rounded {summary.presentation.badge}",
                                "{summary.presentation.icon} {summary.status_label}"
                            }
                            span { class: "text-sm text-gray-500 dark:text-gray-400",
                                "({summary.services.len()} services checked)"
                            }
                        }
                    } else {
                        p { class: "text-sm text-gray-500 dark:text-gray-400", "No status yet" }
                    }
                }
            }
        }
    }
}
