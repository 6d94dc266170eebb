//! Server API functions for the queue monitor.
//!
//! This crate contains the shared fullstack server functions for:
//! - Listing queues and looking one up by name
//! - Pausing and resuming a queue
//! - Server configuration and lazy start-up of the queue supervisor

mod config;
mod queues;

pub use config::{ConfigError, ServerConfig};

#[cfg(feature = "server")]
mod init;

// Re-export all server functions
pub use queues::*;

#[cfg(feature = "server")]
pub use init::*;

// Re-export core types for convenience
pub use queue_core::{Queue, QueueAction, QueueStatus};
