//! Queue domain types and the active/paused state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational state of a queue as shown to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    /// Queue is working its jobs.
    Active,
    /// Queue has been paused and is not picking up new jobs.
    Paused,
}

impl QueueStatus {
    /// Label rendered in the status column.
    pub fn label(self) -> &'static str {
        match self {
            QueueStatus::Active => "Active",
            QueueStatus::Paused => "Paused",
        }
    }

    /// The one action an operator can take from this state.
    pub fn available_action(self) -> QueueAction {
        match self {
            QueueStatus::Active => QueueAction::Pause,
            QueueStatus::Paused => QueueAction::Resume,
        }
    }
}

impl Default for QueueStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueStatus::Active => write!(f, "active"),
            QueueStatus::Paused => write!(f, "paused"),
        }
    }
}

/// Icon drawn on the action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionIcon {
    PauseCircle,
    PlayCircle,
}

/// A state transition request an operator can make on a queue.
///
/// Invoking an action only hands the request to a [`QueueControl`]; the
/// queue itself is never flipped locally. A new collection reflecting the
/// change has to come back from the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueAction {
    /// Request `Active -> Paused`.
    Pause,
    /// Request `Paused -> Active`.
    Resume,
}

impl QueueAction {
    /// Label describing what the control will do.
    pub fn label(self) -> &'static str {
        match self {
            QueueAction::Pause => "Pause",
            QueueAction::Resume => "Resume",
        }
    }

    /// Label for assistive technology, e.g. "Resume, emails".
    pub fn accessible_label(self, name: &str) -> String {
        format!("{}, {}", self.label(), name)
    }

    pub fn icon(self) -> ActionIcon {
        match self {
            QueueAction::Pause => ActionIcon::PauseCircle,
            QueueAction::Resume => ActionIcon::PlayCircle,
        }
    }

    /// Status the queue is expected to reach once the request is honoured.
    pub fn target_status(self) -> QueueStatus {
        match self {
            QueueAction::Pause => QueueStatus::Paused,
            QueueAction::Resume => QueueStatus::Active,
        }
    }

    /// Dispatch this action for `name` to exactly one method of `control`.
    pub fn invoke<C: QueueControl + ?Sized>(self, control: &C, name: &str) {
        match self {
            QueueAction::Pause => control.pause_queue(name),
            QueueAction::Resume => control.resume_queue(name),
        }
    }
}

impl std::fmt::Display for QueueAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fire-and-forget handle for requesting queue state changes.
///
/// Implementations own request execution and failure handling. Callers
/// do not wait for completion and never retry.
pub trait QueueControl {
    /// Request that the named queue be paused.
    fn pause_queue(&self, name: &str);
    /// Request that the named queue be resumed.
    fn resume_queue(&self, name: &str);
}

/// A named queue with its item counts and active/paused state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    /// Unique name, also used as the lookup key.
    pub name: String,
    /// Number of jobs ready to run.
    pub count_available: u64,
    /// Number of jobs currently executing.
    pub count_running: u64,
    /// When the queue was created.
    pub created_at: DateTime<Utc>,
    /// When the queue was paused; `None` while active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<DateTime<Utc>>,
    /// When the queue was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Queue {
    /// Create a new active queue with the given name and no jobs.
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_at(name, Utc::now())
    }

    /// Create a new active queue with an explicit creation time.
    pub fn new_at(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            count_available: 0,
            count_running: 0,
            created_at,
            paused_at: None,
            updated_at: created_at,
        }
    }

    /// Set the available and running counts.
    pub fn with_counts(mut self, available: u64, running: u64) -> Self {
        self.count_available = available;
        self.count_running = running;
        self
    }

    /// Mark the queue as paused at the given time.
    pub fn with_paused_at(mut self, paused_at: DateTime<Utc>) -> Self {
        self.paused_at = Some(paused_at);
        self
    }

    pub fn status(&self) -> QueueStatus {
        if self.paused_at.is_some() {
            QueueStatus::Paused
        } else {
            QueueStatus::Active
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// The single action the operator can take on this queue right now.
    pub fn available_action(&self) -> QueueAction {
        self.status().available_action()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::TimeZone;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(QueueAction, String)>>,
    }

    impl QueueControl for Recorder {
        fn pause_queue(&self, name: &str) {
            self.calls
                .borrow_mut()
                .push((QueueAction::Pause, name.to_string()));
        }

        fn resume_queue(&self, name: &str) {
            self.calls
                .borrow_mut()
                .push((QueueAction::Resume, name.to_string()));
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap_or_default()
    }

    #[test]
    fn status_follows_paused_at() {
        let active = Queue::new_at("emails", t0());
        assert_eq!(active.status(), QueueStatus::Active);
        assert!(!active.is_paused());

        let paused = active.with_paused_at(t0() + chrono::Duration::seconds(30));
        assert_eq!(paused.status(), QueueStatus::Paused);
        assert_eq!(paused.status().label(), "Paused");
    }

    #[test]
    fn action_names_what_will_happen() {
        let active = Queue::new_at("emails", t0());
        assert_eq!(active.available_action(), QueueAction::Pause);
        assert_eq!(active.available_action().label(), "Pause");
        assert_eq!(active.available_action().icon(), ActionIcon::PauseCircle);

        let paused = active.with_paused_at(t0());
        assert_eq!(paused.available_action(), QueueAction::Resume);
        assert_eq!(paused.available_action().label(), "Resume");
        assert_eq!(paused.available_action().icon(), ActionIcon::PlayCircle);
    }

    #[test]
    fn action_targets_the_opposite_status() {
        for status in [QueueStatus::Active, QueueStatus::Paused] {
            assert_ne!(status.available_action().target_status(), status);
        }
    }

    #[test]
    fn invoke_calls_exactly_one_handler() {
        let recorder = Recorder::default();
        let active = Queue::new_at("emails", t0());
        active.available_action().invoke(&recorder, &active.name);

        let paused = Queue::new_at("reports", t0()).with_paused_at(t0());
        paused.available_action().invoke(&recorder, &paused.name);

        assert_eq!(
            recorder.calls.into_inner(),
            vec![
                (QueueAction::Pause, "emails".to_string()),
                (QueueAction::Resume, "reports".to_string()),
            ]
        );
    }

    #[test]
    fn serializes_without_paused_at_when_active() -> Result<(), serde_json::Error> {
        let queue = Queue::new_at("emails", t0()).with_counts(3, 1);
        let json = serde_json::to_value(&queue)?;
        assert!(json.get("paused_at").is_none());
        assert_eq!(json["count_available"], 3);

        let back: Queue = serde_json::from_value(json)?;
        assert_eq!(back, queue);
        Ok(())
    }
}
