//! Server initialization for the queue monitor.

use std::error::Error;

use actors::{global_registry, start_supervisor};
use queue_core::Queue;
use tokio::sync::OnceCell;

use crate::ServerConfig;

/// Boxed error returned by start-up.
pub type InitError = Box<dyn Error + Send + Sync>;

/// Start the queue supervisor and register it globally.
///
/// Queues named in `config.seed_queues` are created active and empty.
pub async fn init_queue_monitor(config: &ServerConfig) -> Result<(), InitError> {
    tracing::info!("Initializing queue monitor...");

    let seed: Vec<Queue> = config.seed_queues.iter().map(Queue::new).collect();
    for queue in &seed {
        tracing::debug!(queue = %queue.name, "Seeding queue");
    }

    let (supervisor, _handle) = start_supervisor(seed).await?;
    global_registry().register_supervisor(supervisor);

    tracing::info!("Queue monitor initialized");
    Ok(())
}

/// Initialize on first use; later calls return immediately.
pub async fn ensure_initialized() -> Result<(), InitError> {
    static INIT: OnceCell<()> = OnceCell::const_new();

    INIT.get_or_try_init(init_from_env).await?;
    Ok(())
}

async fn init_from_env() -> Result<(), InitError> {
    let config = ServerConfig::from_env()?;
    init_queue_monitor(&config).await
}
