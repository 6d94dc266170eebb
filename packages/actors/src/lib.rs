//! Actor system backing the queue monitor.
//!
//! This crate provides the Ractor-based collaborator that owns queue state
//! and honours pause/resume requests. Queue state lives in memory only.
//!
//! # Architecture
//!
//! - `Supervisor` - owns every queue by name and applies state transitions
//! - `ActorRegistry` - process-wide lookup of the running supervisor
//!
//! # Usage
//!
//! ```ignore
//! use actors::{SupervisorMessage, start_supervisor};
//!
//! let (supervisor, handle) = start_supervisor(vec![Queue::new("default")]).await?;
//! supervisor.send_message(SupervisorMessage::PauseQueue { ... })?;
//! ```

mod messages;
pub mod registry;
mod supervisor;

pub use messages::{ActorError, ActorResult, SupervisorMessage};
pub use registry::{ActorRegistry, global_registry};
pub use supervisor::{Supervisor, SupervisorState, start_supervisor};

/// Re-export ractor types for convenience.
pub use ractor::{Actor, ActorRef, RpcReplyPort, concurrency};
