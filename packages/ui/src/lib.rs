//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

pub mod clock;
pub use clock::{ClockSource, use_clock_tick};

pub mod admin;
