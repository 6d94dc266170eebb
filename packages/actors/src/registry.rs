//! Actor registry for discovering the running supervisor.

use std::sync::{PoisonError, RwLock};

use ractor::ActorRef;

use crate::messages::SupervisorMessage;

/// Global actor registry.
///
/// Server functions look the supervisor up here instead of threading an
/// `ActorRef` through every request.
pub struct ActorRegistry {
    supervisor: RwLock<Option<ActorRef<SupervisorMessage>>>,
}

impl ActorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            supervisor: RwLock::new(None),
        }
    }

    /// Register the supervisor, replacing any previous one.
    pub fn register_supervisor(&self, supervisor: ActorRef<SupervisorMessage>) {
        *self
            .supervisor
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(supervisor);
    }

    /// Get the supervisor.
    pub fn get_supervisor(&self) -> Option<ActorRef<SupervisorMessage>> {
        self.supervisor
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ActorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry instance.
static REGISTRY: std::sync::LazyLock<ActorRegistry> = std::sync::LazyLock::new(ActorRegistry::new);

/// Get the global actor registry.
pub fn global_registry() -> &'static ActorRegistry {
    &REGISTRY
}
