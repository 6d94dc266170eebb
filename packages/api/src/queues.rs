//! Queue server functions.

use dioxus::prelude::*;
use queue_core::Queue;

#[cfg(feature = "server")]
use actors::{ActorRef, SupervisorMessage};

/// Initialize if needed and look up the running supervisor.
#[cfg(feature = "server")]
async fn supervisor() -> Result<ActorRef<SupervisorMessage>, ServerFnError> {
    crate::ensure_initialized()
        .await
        .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

    actors::global_registry()
        .get_supervisor()
        .ok_or_else(|| ServerFnError::new(actors::ActorError::SupervisorUnavailable))
}

/// List all queues, ordered by name.
#[get("/api/queues")]
pub async fn list_queues() -> Result<Vec<Queue>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let supervisor = supervisor().await?;

        let (tx, rx) = actors::concurrency::oneshot();
        supervisor
            .send_message(SupervisorMessage::ListQueues { reply: tx.into() })
            .map_err(|e| ServerFnError::new(format!("Failed to send message: {}", e)))?;

        rx.await
            .map_err(|_| ServerFnError::new("Failed to receive response"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Get a queue by name.
#[get("/api/queues/:name")]
pub async fn get_queue(name: String) -> Result<Option<Queue>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let supervisor = supervisor().await?;

        let (tx, rx) = actors::concurrency::oneshot();
        supervisor
            .send_message(SupervisorMessage::GetQueue {
                name,
                reply: tx.into(),
            })
            .map_err(|e| ServerFnError::new(format!("Failed to send message: {}", e)))?;

        rx.await
            .map_err(|_| ServerFnError::new("Failed to receive response"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Pause a queue.
#[post("/api/queues/:name/pause")]
pub async fn pause_queue(name: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        let supervisor = supervisor().await?;

        let (tx, rx) = actors::concurrency::oneshot();
        supervisor
            .send_message(SupervisorMessage::PauseQueue {
                name,
                reply: tx.into(),
            })
            .map_err(|e| ServerFnError::new(format!("Failed to send message: {}", e)))?;

        rx.await
            .map_err(|_| ServerFnError::new("Failed to receive response"))?
            .map(|_| ())
            .map_err(ServerFnError::new)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Resume a paused queue.
#[post("/api/queues/:name/resume")]
pub async fn resume_queue(name: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        let supervisor = supervisor().await?;

        let (tx, rx) = actors::concurrency::oneshot();
        supervisor
            .send_message(SupervisorMessage::ResumeQueue {
                name,
                reply: tx.into(),
            })
            .map_err(|e| ServerFnError::new(format!("Failed to send message: {}", e)))?;

        rx.await
            .map_err(|_| ServerFnError::new("Failed to receive response"))?
            .map(|_| ())
            .map_err(ServerFnError::new)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
