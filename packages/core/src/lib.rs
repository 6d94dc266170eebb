//! Core domain types for the queue monitor.
//!
//! This crate contains the pure pieces shared by every package:
//! - Queue, QueueStatus and QueueAction for the per-queue state machine
//! - Tick for the shared wall-clock second
//! - Relative time formatting and its memo cell
//! - Display density policy for the queue table
//! - QueueRow, the render/action contract of one queue

mod density;
mod queue;
mod relative_time;
mod row;
mod tick;

pub use density::{Column, DisplayDensity, FoldedField, ParseDensityError};
pub use queue::{ActionIcon, Queue, QueueAction, QueueControl, QueueStatus};
pub use relative_time::{RelativeLabel, RelativeTimeOptions, format_relative};
pub use row::QueueRow;
pub use tick::Tick;
