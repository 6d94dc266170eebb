//! Queue status badge.

use dioxus::prelude::*;
use queue_core::QueueStatus;

/// Badge for displaying queue status.
#[component]
pub fn StatusBadge(status: QueueStatus) -> Element {
    let bg_class = match status {
        QueueStatus::Active => "badge-running",
        QueueStatus::Paused => "badge-paused",
    };
    let text = status.label();

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {text}
        }
    }
}
