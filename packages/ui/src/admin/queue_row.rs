//! Queue row component for the queue table.

use dioxus::prelude::*;
use queue_core::{Column, DisplayDensity, FoldedField, QueueRow};

use super::{QueueActionButton, RelativeTime, StatusBadge};

/// Props for QueueRowView component.
#[derive(Props, Clone, PartialEq)]
pub struct QueueRowViewProps {
    /// The row to display.
    pub row: QueueRow,
    /// Which fields get their own cell.
    pub density: DisplayDensity,
    /// Link to the queue's detail view.
    pub href: String,
    /// Callback when pause is clicked.
    pub on_pause: EventHandler<String>,
    /// Callback when resume is clicked.
    pub on_resume: EventHandler<String>,
}

/// Table row for a single queue.
///
/// Fields that do not fit at the current density are folded into a list
/// under the name instead of being dropped.
#[component]
pub fn QueueRowView(props: QueueRowViewProps) -> Element {
    let row = props.row.clone();
    let density = props.density;
    let folded = density.folded_fields();

    rsx! {
        tr { class: "data-row",
            td { class: "queue-name-cell",
                Link {
                    to: props.href.clone(),
                    class: "queue-link font-mono",
                    "{row.name}"
                }
                if !folded.is_empty() {
                    dl { class: "queue-compact",
                        for field in folded.iter().copied() {
                            dt { class: "sr-only", {field.column().header()} }
                            dd { class: "queue-compact-line",
                                if field == FoldedField::Created {
                                    RelativeTime {
                                        timestamp: row.created_at,
                                        options: QueueRow::CREATED_LABEL_OPTIONS,
                                    }
                                } else {
                                    {row.folded_text(field, "")}
                                }
                            }
                        }
                    }
                }
            }
            if density.shows_column(Column::Created) {
                td { class: "text-right text-muted",
                    RelativeTime {
                        timestamp: row.created_at,
                        options: QueueRow::CREATED_LABEL_OPTIONS,
                    }
                }
            }
            if density.shows_column(Column::Available) {
                td { class: "text-right tabular-nums", "{row.count_available}" }
            }
            if density.shows_column(Column::Running) {
                td { class: "text-right tabular-nums", "{row.count_running}" }
            }
            td {
                StatusBadge { status: row.status }
            }
            td { class: "text-right",
                QueueActionButton {
                    queue_name: row.name.clone(),
                    action: row.action,
                    on_pause: props.on_pause.clone(),
                    on_resume: props.on_resume.clone(),
                }
            }
        }
    }
}
