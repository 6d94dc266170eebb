//! Render/action contract for one queue row.

use chrono::{DateTime, Utc};

use crate::{
    DisplayDensity, FoldedField, Queue, QueueAction, QueueControl, QueueStatus,
    RelativeTimeOptions,
};

/// Everything a table row needs to show one queue and offer its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRow {
    pub name: String,
    pub status: QueueStatus,
    pub action: QueueAction,
    pub created_at: DateTime<Utc>,
    pub count_available: u64,
    pub count_running: u64,
}

impl QueueRow {
    /// Options used for the created-time label.
    pub const CREATED_LABEL_OPTIONS: RelativeTimeOptions = RelativeTimeOptions {
        add_suffix: true,
        include_seconds: true,
        humanize: false,
    };

    pub fn from_queue(queue: &Queue) -> Self {
        let status = queue.status();
        Self {
            name: queue.name.clone(),
            status,
            action: status.available_action(),
            created_at: queue.created_at,
            count_available: queue.count_available,
            count_running: queue.count_running,
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    pub fn accessible_action_label(&self) -> String {
        self.action.accessible_label(&self.name)
    }

    /// Hand this row's action to `control`.
    pub fn trigger<C: QueueControl + ?Sized>(&self, control: &C) {
        self.action.invoke(control, &self.name);
    }

    /// Text of one folded field. The created label is rendered by the caller
    /// so it can stay live.
    pub fn folded_text(&self, field: FoldedField, created_label: &str) -> String {
        match field {
            FoldedField::Created => created_label.to_string(),
            FoldedField::Available => format!("{} available", self.count_available),
            FoldedField::Running => format!("{} running", self.count_running),
        }
    }

    /// Lines of the compact cell at the given density.
    pub fn compact_lines(&self, density: DisplayDensity, created_label: &str) -> Vec<String> {
        density
            .folded_fields()
            .iter()
            .map(|field| self.folded_text(*field, created_label))
            .collect()
    }
}

impl From<&Queue> for QueueRow {
    fn from(queue: &Queue) -> Self {
        Self::from_queue(queue)
    }
}
