//! Page components for route-based navigation.

mod queue_detail_page;
mod queues_page;

pub use queue_detail_page::QueueDetailPage;
pub use queues_page::QueuesPage;

/// Refresh interval in milliseconds (2 seconds).
const REFRESH_INTERVAL_MS: u64 = 2000;
