//! Supervisor actor owning all queue state.

use std::collections::BTreeMap;

use chrono::Utc;
use queue_core::Queue;
use ractor::{Actor, ActorProcessingErr, ActorRef};

use crate::messages::{ActorError, ActorResult, SupervisorMessage};

/// State for the supervisor actor.
pub struct SupervisorState {
    /// All queues keyed by name; iteration order is the listing order.
    queues: BTreeMap<String, Queue>,
}

impl SupervisorState {
    /// Create a state holding the given queues. Later duplicates replace
    /// earlier ones.
    pub fn new(seed: Vec<Queue>) -> Self {
        let queues = seed
            .into_iter()
            .map(|queue| (queue.name.clone(), queue))
            .collect();
        Self { queues }
    }

    fn create(&mut self, name: String) -> ActorResult<Queue> {
        if self.queues.contains_key(&name) {
            return Err(ActorError::QueueExists(name));
        }
        let queue = Queue::new(name.clone());
        self.queues.insert(name, queue.clone());
        Ok(queue)
    }

    fn pause(&mut self, name: &str) -> ActorResult<Queue> {
        let queue = self
            .queues
            .get_mut(name)
            .ok_or_else(|| ActorError::QueueNotFound(name.to_string()))?;
        if queue.paused_at.is_none() {
            let now = Utc::now();
            queue.paused_at = Some(now);
            queue.updated_at = now;
            tracing::info!(queue = %name, "Queue paused");
        }
        Ok(queue.clone())
    }

    fn resume(&mut self, name: &str) -> ActorResult<Queue> {
        let queue = self
            .queues
            .get_mut(name)
            .ok_or_else(|| ActorError::QueueNotFound(name.to_string()))?;
        if queue.paused_at.take().is_some() {
            queue.updated_at = Utc::now();
            tracing::info!(queue = %name, "Queue resumed");
        }
        Ok(queue.clone())
    }
}

/// Supervisor actor that manages all queues.
pub struct Supervisor;

impl Actor for Supervisor {
    type Msg = SupervisorMessage;
    type State = SupervisorState;
    type Arguments = Vec<Queue>;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        tracing::info!(queues = args.len(), "Starting queue supervisor");
        Ok(SupervisorState::new(args))
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            SupervisorMessage::CreateQueue { name, reply } => {
                let _ = reply.send(state.create(name));
            }

            SupervisorMessage::GetQueue { name, reply } => {
                let _ = reply.send(state.queues.get(&name).cloned());
            }

            SupervisorMessage::ListQueues { reply } => {
                let _ = reply.send(state.queues.values().cloned().collect());
            }

            SupervisorMessage::PauseQueue { name, reply } => {
                let result = state.pause(&name);
                if let Err(e) = &result {
                    tracing::warn!("Pause rejected: {}", e);
                }
                let _ = reply.send(result);
            }

            SupervisorMessage::ResumeQueue { name, reply } => {
                let result = state.resume(&name);
                if let Err(e) = &result {
                    tracing::warn!("Resume rejected: {}", e);
                }
                let _ = reply.send(result);
            }

            SupervisorMessage::Shutdown => {
                tracing::info!("Shutting down supervisor");
                myself.stop(None);
            }
        }

        Ok(())
    }
}

/// Start the supervisor with an initial set of queues.
pub async fn start_supervisor(
    seed: Vec<Queue>,
) -> Result<(ActorRef<SupervisorMessage>, tokio::task::JoinHandle<()>), ractor::SpawnErr> {
    let (actor, handle) = Actor::spawn(None, Supervisor, seed).await?;

    Ok((actor, handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut state = SupervisorState::new(vec![Queue::new("emails")]);

        let paused = state.pause("emails");
        let first = paused.as_ref().ok().and_then(|q| q.paused_at);
        assert!(first.is_some());

        let again = state.pause("emails");
        assert_eq!(again.ok().and_then(|q| q.paused_at), first);

        let resumed = state.resume("emails");
        assert_eq!(resumed.ok().and_then(|q| q.paused_at), None);
        assert!(state.resume("emails").is_ok());
    }

    #[test]
    fn unknown_queue_is_rejected() {
        let mut state = SupervisorState::new(Vec::new());
        assert_eq!(
            state.pause("missing"),
            Err(ActorError::QueueNotFound("missing".to_string()))
        );
        assert_eq!(
            state.resume("missing"),
            Err(ActorError::QueueNotFound("missing".to_string()))
        );
    }

    #[test]
    fn duplicate_names_are_rejected_on_create() {
        let mut state = SupervisorState::new(Vec::new());
        assert!(state.create("emails".to_string()).is_ok());
        assert_eq!(
            state.create("emails".to_string()),
            Err(ActorError::QueueExists("emails".to_string()))
        );
    }
}
