//! Live relative-time label.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use queue_core::{RelativeLabel, RelativeTimeOptions};

use crate::use_clock_tick;

/// Props for RelativeTime component.
#[derive(Props, Clone, PartialEq)]
pub struct RelativeTimeProps {
    /// The moment being described.
    pub timestamp: DateTime<Utc>,
    /// Formatting switches.
    #[props(default)]
    pub options: RelativeTimeOptions,
}

/// "5 seconds ago" style label that follows the shared clock.
///
/// The text is recomputed only when the tick, the timestamp or the options
/// change; no per-label timer is started.
#[component]
pub fn RelativeTime(props: RelativeTimeProps) -> Element {
    let now = use_clock_tick();
    let label = use_hook(|| Rc::new(RefCell::new(RelativeLabel::new())));

    let text = label
        .borrow_mut()
        .resolve(props.timestamp, now, props.options)
        .to_string();
    let iso = props.timestamp.to_rfc3339();

    rsx! {
        time {
            datetime: "{iso}",
            title: "{iso}",
            "{text}"
        }
    }
}
