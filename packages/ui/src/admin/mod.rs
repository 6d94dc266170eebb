//! Queue monitor components.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

mod action_button;
mod queue_list;
mod queue_row;
mod relative_time;
mod status_badge;
pub mod pages;

pub use action_button::{QueueActionButton, QueueActionButtonProps};
pub use queue_list::{QueueList, QueueListProps};
pub use queue_row::{QueueRowView, QueueRowViewProps};
pub use relative_time::{RelativeTime, RelativeTimeProps};
pub use status_badge::StatusBadge;

/// Path of the queue list.
pub const QUEUES_PATH: &str = "/queues";

/// Characters left as-is in a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path of a queue's detail view. The name is percent-encoded so that
/// `/`, `?` or `#` in it stay inside the segment.
pub fn queue_detail_path(name: &str) -> String {
    format!("{QUEUES_PATH}/{}", utf8_percent_encode(name, SEGMENT))
}
