//! Message types for actor communication.

use queue_core::Queue;
use ractor::RpcReplyPort;

/// Messages for the Supervisor.
#[derive(Debug)]
pub enum SupervisorMessage {
    /// Create a new active queue.
    CreateQueue {
        name: String,
        reply: RpcReplyPort<ActorResult<Queue>>,
    },

    /// Get a queue by name.
    GetQueue {
        name: String,
        reply: RpcReplyPort<Option<Queue>>,
    },

    /// List all queues, ordered by name.
    ListQueues { reply: RpcReplyPort<Vec<Queue>> },

    /// Pause a queue. Pausing a paused queue is a no-op.
    PauseQueue {
        name: String,
        reply: RpcReplyPort<ActorResult<Queue>>,
    },

    /// Resume a queue. Resuming an active queue is a no-op.
    ResumeQueue {
        name: String,
        reply: RpcReplyPort<ActorResult<Queue>>,
    },

    /// Stop the supervisor.
    Shutdown,
}

/// Result type for supervisor operations.
pub type ActorResult<T> = Result<T, ActorError>;

/// Error type for actor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActorError {
    #[error("Queue not found: {0}")]
    QueueNotFound(String),

    #[error("Queue already exists: {0}")]
    QueueExists(String),

    #[error("Supervisor not available")]
    SupervisorUnavailable,
}
