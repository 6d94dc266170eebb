//! Queue detail page - displays a single queue.

use std::time::Duration;

use dioxus::prelude::*;
use queue_core::{Queue, QueueRow, RelativeTimeOptions};

use super::REFRESH_INTERVAL_MS;
use crate::admin::{QUEUES_PATH, QueueActionButton, RelativeTime, StatusBadge};
use crate::clock::sleep;

/// Props for QueueDetailPage.
#[derive(Props, Clone, PartialEq)]
pub struct QueueDetailPageProps {
    pub name: String,
}

/// Queue detail page component.
#[component]
pub fn QueueDetailPage(props: QueueDetailPageProps) -> Element {
    let name = props.name.clone();
    let mut queue = use_signal(|| None::<Queue>);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    // Auto-refresh the queue
    let name_for_refresh = name.clone();
    let _refresh = use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let name = name_for_refresh.clone();
        async move {
            loop {
                match api::get_queue(name.clone()).await {
                    Ok(q) => {
                        queue.set(q);
                        loading.set(false);
                    }
                    Err(e) => tracing::warn!(queue = %name, "Failed to load queue: {}", e),
                }

                sleep(Duration::from_millis(REFRESH_INTERVAL_MS)).await;
            }
        }
    });

    let refresh = move |name: String| {
        spawn(async move {
            if let Ok(q) = api::get_queue(name).await {
                queue.set(q);
            }
        });
    };

    let on_pause = move |name: String| {
        spawn(async move {
            if let Err(e) = api::pause_queue(name.clone()).await {
                tracing::warn!(queue = %name, "Pause request failed: {}", e);
                error.set(Some(format!("Failed to pause queue: {}", e)));
            } else {
                refresh(name);
            }
        });
    };

    let on_resume = move |name: String| {
        spawn(async move {
            if let Err(e) = api::resume_queue(name.clone()).await {
                tracing::warn!(queue = %name, "Resume request failed: {}", e);
                error.set(Some(format!("Failed to resume queue: {}", e)));
            } else {
                refresh(name);
            }
        });
    };

    let humanized = RelativeTimeOptions::default().with_suffix().humanized();

    rsx! {
        div { class: "page-container",
            // Breadcrumb
            nav { class: "breadcrumb",
                Link { to: QUEUES_PATH, class: "breadcrumb-link", "Queues" }
                span { class: "breadcrumb-separator", "/" }
                span { class: "breadcrumb-current font-mono", "{name}" }
            }

            // Error banner
            if let Some(err) = error() {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }

            if loading() {
                div { class: "loading", "Loading..." }
            } else if let Some(q) = queue() {
                div { class: "page-header",
                    div { class: "page-header-content",
                        div { class: "page-header-title-row",
                            h1 { class: "page-title font-mono", "{q.name}" }
                            StatusBadge { status: q.status() }
                        }
                    }
                    div { class: "page-header-actions",
                        QueueActionButton {
                            queue_name: q.name.clone(),
                            action: q.available_action(),
                            on_pause: on_pause,
                            on_resume: on_resume,
                            show_label: true,
                        }
                    }
                }

                div { class: "stats-grid stats-grid-sm",
                    div { class: "stat-card",
                        div { class: "stat-card-value", "{q.count_available}" }
                        div { class: "stat-card-label", "Available" }
                    }
                    div { class: "stat-card stat-card-accent",
                        div { class: "stat-card-value", "{q.count_running}" }
                        div { class: "stat-card-label", "Running" }
                    }
                }

                dl { class: "detail-list",
                    dt { "Created" }
                    dd {
                        RelativeTime {
                            timestamp: q.created_at,
                            options: QueueRow::CREATED_LABEL_OPTIONS,
                        }
                    }
                    if let Some(paused_at) = q.paused_at {
                        dt { "Paused" }
                        dd {
                            RelativeTime {
                                timestamp: paused_at,
                                options: QueueRow::CREATED_LABEL_OPTIONS,
                            }
                        }
                    }
                    dt { "Updated" }
                    dd {
                        RelativeTime { timestamp: q.updated_at, options: humanized }
                    }
                }
            } else {
                div { class: "empty-state",
                    p { "Queue not found" }
                }
            }
        }
    }
}
