//! Queues list page - displays all queues with live status.

use std::time::Duration;

use dioxus::prelude::*;
use queue_core::Queue;

use super::REFRESH_INTERVAL_MS;
use crate::admin::{QueueList, queue_detail_path};
use crate::clock::sleep;

/// What the list page knows about the queues.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueuesState {
    pub queues: Vec<Queue>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for QueuesState {
    fn default() -> Self {
        Self {
            queues: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl QueuesState {
    /// Apply the outcome of a list fetch.
    ///
    /// A failure keeps the last known queues and surfaces in the banner.
    pub fn apply_fetch(&mut self, result: Result<Vec<Queue>, ServerFnError>) {
        match result {
            Ok(queues) => {
                self.queues = queues;
                self.loading = false;
            }
            Err(e) => {
                tracing::warn!("Failed to load queues: {}", e);
                self.error = Some(format!("Failed to load queues: {}", e));
            }
        }
    }
}

/// Queues list page component.
#[component]
pub fn QueuesPage() -> Element {
    let mut state = use_signal(QueuesState::default);

    // Auto-refresh: fetch queues every 2 seconds
    let _refresh = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            let result = api::list_queues().await;
            state.write().apply_fetch(result);

            sleep(Duration::from_millis(REFRESH_INTERVAL_MS)).await;
        }
    });

    // Pause queue handler
    let on_pause = move |name: String| {
        spawn(async move {
            if let Err(e) = api::pause_queue(name.clone()).await {
                tracing::warn!(queue = %name, "Pause request failed: {}", e);
                state.write().error = Some(format!("Failed to pause queue: {}", e));
            } else {
                let result = api::list_queues().await;
                state.write().apply_fetch(result);
            }
        });
    };

    // Resume queue handler
    let on_resume = move |name: String| {
        spawn(async move {
            if let Err(e) = api::resume_queue(name.clone()).await {
                tracing::warn!(queue = %name, "Resume request failed: {}", e);
                state.write().error = Some(format!("Failed to resume queue: {}", e));
            } else {
                let result = api::list_queues().await;
                state.write().apply_fetch(result);
            }
        });
    };

    let QueuesState {
        queues,
        loading,
        error,
    } = state();

    rsx! {
        div { class: "page-container",
            // Page header
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Queues" }
                }
            }

            // Error banner
            if let Some(err) = error {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| {
                            state.write().error = None;
                        },
                        "×"
                    }
                }
            }

            div { class: "card",
                QueueList {
                    loading,
                    queues,
                    on_pause: on_pause,
                    on_resume: on_resume,
                    queue_link: move |name: String| queue_detail_path(&name),
                }
            }
        }
    }
}
