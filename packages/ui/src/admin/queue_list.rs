//! Queue list component.

use dioxus::prelude::*;
use queue_core::{Column, DisplayDensity, Queue, QueueRow};

use super::QueueRowView;

/// Props for QueueList component.
#[derive(Props, Clone, PartialEq)]
pub struct QueueListProps {
    /// Show a placeholder instead of the table.
    pub loading: bool,
    /// Queues to display, in the order given.
    pub queues: Vec<Queue>,
    /// Callback when pause is clicked, with the queue name.
    pub on_pause: EventHandler<String>,
    /// Callback when resume is clicked, with the queue name.
    pub on_resume: EventHandler<String>,
    /// Resolves a queue name to its detail link.
    pub queue_link: Callback<String, String>,
    /// Fixed density; measured from the container width when unset.
    #[props(default)]
    pub density: Option<DisplayDensity>,
}

/// Table of queues with their status and pause/resume control.
#[component]
pub fn QueueList(props: QueueListProps) -> Element {
    let mut measured_width = use_signal(|| None::<f64>);

    if props.loading {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    let density = props
        .density
        .or_else(|| measured_width().map(DisplayDensity::for_width))
        .unwrap_or_default();

    rsx! {
        div {
            class: "table-container density-{density}",
            onresize: move |e: Event<ResizeData>| {
                if let Ok(size) = e.get_content_box_size() {
                    measured_width.set(Some(size.width));
                }
            },
            table { class: "data-table",
                thead {
                    tr {
                        for column in density.columns().iter().copied() {
                            if column == Column::Controls {
                                th {
                                    span { class: "sr-only", {column.header()} }
                                }
                            } else if column.is_right_aligned() {
                                th { class: "text-right", {column.header()} }
                            } else {
                                th { {column.header()} }
                            }
                        }
                    }
                }
                tbody {
                    for queue in props.queues.iter() {
                        QueueRowView {
                            key: "{queue.name}",
                            row: QueueRow::from_queue(queue),
                            density,
                            href: props.queue_link.call(queue.name.clone()),
                            on_pause: props.on_pause.clone(),
                            on_resume: props.on_resume.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::admin::queue_detail_path;

    #[derive(Clone, PartialEq)]
    struct Fixture {
        loading: bool,
        queues: Vec<Queue>,
        density: DisplayDensity,
    }

    #[derive(Debug, Clone, Routable, PartialEq)]
    enum TestRoute {
        #[route("/")]
        Harness {},
    }

    #[component]
    fn Root(fixture: Fixture) -> Element {
        use_context_provider(|| fixture.clone());
        rsx! { Router::<TestRoute> {} }
    }

    #[component]
    fn Harness() -> Element {
        let fixture = use_context::<Fixture>();
        rsx! {
            QueueList {
                loading: fixture.loading,
                queues: fixture.queues,
                on_pause: move |_: String| {},
                on_resume: move |_: String| {},
                queue_link: move |name: String| queue_detail_path(&name),
                density: fixture.density,
            }
        }
    }

    fn render(loading: bool, queues: Vec<Queue>, density: DisplayDensity) -> String {
        let fixture = Fixture {
            loading,
            queues,
            density,
        };
        let mut dom = VirtualDom::new_with_props(Root, RootProps { fixture });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn queue(name: &str) -> Queue {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap_or_default();
        Queue::new_at(name, created).with_counts(3, 1)
    }

    fn paused(name: &str) -> Queue {
        let queue = queue(name);
        let at = queue.created_at;
        queue.with_paused_at(at)
    }

    #[test]
    fn loading_hides_the_table() {
        let html = render(true, vec![queue("emails")], DisplayDensity::Full);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("<table"));
        assert!(!html.contains("emails"));
    }

    #[test]
    fn empty_list_renders_header_only() {
        let html = render(false, Vec::new(), DisplayDensity::Full);
        assert!(html.contains("<table"));
        assert!(html.contains("<thead"));
        assert!(html.contains("Name"));
        assert!(html.contains("Status"));
        assert_eq!(html.matches("data-row").count(), 0);
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn one_control_per_row_matching_state() {
        let html = render(
            false,
            vec![queue("emails"), paused("reports")],
            DisplayDensity::Full,
        );
        assert_eq!(html.matches("data-row").count(), 2);
        assert_eq!(html.matches("<button").count(), 2);
        assert_eq!(html.matches(r#"title="Pause""#).count(), 1);
        assert_eq!(html.matches(r#"title="Resume""#).count(), 1);
        assert!(html.contains("Resume, reports"));
        assert!(html.contains("Pause, emails"));
    }

    #[test]
    fn detail_link_in_both_states() {
        let html = render(
            false,
            vec![queue("emails"), paused("reports")],
            DisplayDensity::Full,
        );
        assert!(html.contains(r#"href="/queues/emails""#));
        assert!(html.contains(r#"href="/queues/reports""#));
    }

    #[test]
    fn compact_rows_fold_counts() {
        let html = render(false, vec![queue("emails")], DisplayDensity::Compact);
        assert!(html.contains("queue-compact"));
        assert!(html.contains("3 available"));
        assert!(html.contains("1 running"));
        assert!(!html.contains(r#"<th class="text-right">Available</th>"#));
        assert!(!html.contains(r#"<th class="text-right">Running</th>"#));
    }

    #[test]
    fn full_rows_give_counts_their_own_columns() {
        let html = render(false, vec![queue("emails")], DisplayDensity::Full);
        assert!(!html.contains("queue-compact"));
        assert!(!html.contains("3 available"));
        assert!(html.contains(r#"<th class="text-right">Available</th>"#));
        assert!(html.contains(r#"<th class="text-right">Running</th>"#));
    }
}
