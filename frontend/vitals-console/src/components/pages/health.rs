//! System Health page component

use crate::api::health::fetch_system_health;
use crate::components::announcer::use_announcer;
use crate::view;
use dioxus::prelude::*;
use vitals_models::HealthReport;

#[component]
pub fn SystemHealth() -> Element {
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let mut report = use_signal(|| None::<HealthReport>);

    // Fetch the latest report; the previous one is discarded either way.
    let refresh = move || {
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            match fetch_system_health().await {
                Ok(data) => report.set(Some(data)),
                Err(e) => {
                    tracing::error!("Health check failed: {e}");
                    report.set(None);
                    error_msg.set(Some(view::error_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    let mut announcer = use_announcer();
    use_effect(move || {
        announcer.announce("System Health page loaded");
    });

    // Auto-fetch on mount
    use_effect(move || {
        refresh();
    });

    let health = view::assemble(report.read().as_ref());

    rsx! {
        div { class: "max-w-7xl mx-auto p-6 space-y-6",
            // Header
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-3xl font-bold text-gray-900 dark:text-white", "System Health" }
                    p { class: "text-gray-600 dark:text-gray-300 mt-1",
                        "Monitor API status and system connectivity"
                    }
                }
                button {
                    class: "px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors flex items-center gap-2 disabled:opacity-60",
                    disabled: loading(),
                    aria_label: "Refresh system health status",
                    onclick: move |_| refresh(),
                    "↻ Refresh"
                }
            }

            // Loading state
            if loading() {
                div { class: "flex items-center justify-center py-16",
                    div { class: "inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600 dark:border-blue-400" }
                    span { class: "ml-3 text-lg text-gray-900 dark:text-white", "Checking system health..." }
                }
            }

            // Error state
            if let Some(err) = error_msg() {
                div { class: "bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-6",
                    h3 { class: "text-lg font-medium text-red-900 dark:text-red-200", "Health Check Failed" }
                    p { class: "text-red-700 dark:text-red-300 mt-1", "{err}" }
                    button {
                        class: "mt-3 text-sm text-red-800 dark:text-red-200 hover:text-red-900 dark:hover:text-red-100 underline",
                        onclick: move |_| refresh(),
                        "Try again"
                    }
                }
            }

            // Report display
            if !loading() {
                if let Some(health) = health {
                    // Overall status card
                    div { class: "bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6",
                        div { class: "flex items-center justify-between mb-4",
                            h2 { class: "text-xl font-semibold text-gray-900 dark:text-white", "Overall System Status" }
                            span {
                                class: "inline-flex items-center px-3 py-1 rounded-full text-sm font-medium {health.presentation.badge}",
                                aria_label: "Overall status: {health.severity}",
                                span { class: "mr-1", "{health.presentation.icon}" }
                                "{health.status_label}"
                            }
                        }

                        div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                            div { class: "text-center",
                                div { class: "text-3xl mb-2", "{health.presentation.icon}" }
                                div { class: "text-sm text-gray-500 dark:text-gray-400", "Status" }
                                div { class: "font-medium {health.presentation.color}", "{health.status_label}" }
                            }
                            div { class: "text-center",
                                div { class: "text-3xl mb-2", "⏱️" }
                                div { class: "text-sm text-gray-500 dark:text-gray-400", "Response Time" }
                                div { class: "font-medium text-gray-900 dark:text-white", "{health.total_duration}" }
                            }
                            div { class: "text-center",
                                div { class: "text-3xl mb-2", "📅" }
                                div { class: "text-sm text-gray-500 dark:text-gray-400", "Last Checked" }
                                div { class: "font-medium text-gray-900 dark:text-white", "{health.checked_at}" }
                            }
                        }
                    }

                    // Per-service checks
                    if !health.services.is_empty() {
                        div { class: "bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6",
                            h3 { class: "text-lg font-semibold text-gray-900 dark:text-white mb-4", "Service Details" }
                            div { class: "space-y-4",
                                for svc in health.services.iter() {
                                    div { class: "flex items-center justify-between p-4 bg-gray-50 dark:bg-gray-700 rounded-lg",
                                        div { class: "flex items-center space-x-3",
                                            span { class: "text-lg", "{svc.presentation.icon}" }
                                            div {
                                                div { class: "font-medium text-gray-900 dark:text-white capitalize", "{svc.name}" }
                                                if let Some(description) = &svc.description {
                                                    div { class: "text-sm text-gray-500 dark:text-gray-400", "{description}" }
                                                }
                                                if let Some(error) = &svc.error {
                                                    div { class: "text-sm text-red-600 dark:text-red-400", "{error}" }
                                                }
                                            }
                                        }
                                        div { class: "flex items-center space-x-4",
                                            if let Some(duration) = &svc.duration {
                                                div { class: "text-sm text-gray-500 dark:text-gray-400", "{duration}" }
                                            }
                                            span {
                                                class: "inline-flex items-center px-3 py-1 rounded-full text-sm font-medium {svc.presentation.badge}",
                                                aria_label: "{svc.name} status: {svc.severity}",
                                                "{svc.status_label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // System information
                    div { class: "bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6",
                        h3 { class: "text-lg font-semibold text-gray-900 dark:text-white mb-4", "System Information" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            div {
                                h4 { class: "font-medium text-gray-900 dark:text-white mb-3", "API Endpoints" }
                                div { class: "space-y-2 text-sm",
                                    div { class: "flex justify-between",
                                        span { class: "text-gray-500 dark:text-gray-400", "Health Check:" }
                                        span { class: "font-mono text-gray-900 dark:text-white", "/health" }
                                    }
                                }
                            }
                            div {
                                h4 { class: "font-medium text-gray-900 dark:text-white mb-3", "Connection Status" }
                                div { class: "space-y-2 text-sm",
                                    div { class: "flex items-center space-x-2",
                                        div { class: "w-2 h-2 bg-green-500 rounded-full" }
                                        span { class: "text-gray-900 dark:text-white", "API Connected" }
                                    }
                                    div { class: "flex items-center space-x-2",
                                        div { class: "w-2 h-2 bg-blue-500 rounded-full" }
                                        span { class: "text-gray-900 dark:text-white", "Manual Refresh" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
