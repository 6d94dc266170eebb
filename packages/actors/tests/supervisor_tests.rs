#![allow(clippy::disallowed_methods)]

use std::error::Error;

use actors::{ActorError, ActorRef, SupervisorMessage, concurrency, start_supervisor};
use queue_core::{Queue, QueueStatus};

async fn list(supervisor: &ActorRef<SupervisorMessage>) -> Result<Vec<Queue>, Box<dyn Error>> {
    let (tx, rx) = concurrency::oneshot();
    supervisor.send_message(SupervisorMessage::ListQueues { reply: tx.into() })?;
    Ok(rx.await?)
}

async fn pause(
    supervisor: &ActorRef<SupervisorMessage>,
    name: &str,
) -> Result<Result<Queue, ActorError>, Box<dyn Error>> {
    let (tx, rx) = concurrency::oneshot();
    supervisor.send_message(SupervisorMessage::PauseQueue {
        name: name.to_string(),
        reply: tx.into(),
    })?;
    Ok(rx.await?)
}

async fn resume(
    supervisor: &ActorRef<SupervisorMessage>,
    name: &str,
) -> Result<Result<Queue, ActorError>, Box<dyn Error>> {
    let (tx, rx) = concurrency::oneshot();
    supervisor.send_message(SupervisorMessage::ResumeQueue {
        name: name.to_string(),
        reply: tx.into(),
    })?;
    Ok(rx.await?)
}

#[tokio::test]
async fn lists_queues_by_name() -> Result<(), Box<dyn Error>> {
    let (supervisor, handle) =
        start_supervisor(vec![Queue::new("reports"), Queue::new("emails")]).await?;

    let (tx, rx) = concurrency::oneshot();
    supervisor.send_message(SupervisorMessage::CreateQueue {
        name: "billing".to_string(),
        reply: tx.into(),
    })?;
    let created = rx.await??;
    assert_eq!(created.status(), QueueStatus::Active);

    let names: Vec<String> = list(&supervisor).await?.into_iter().map(|q| q.name).collect();
    assert_eq!(names, vec!["billing", "emails", "reports"]);

    supervisor.send_message(SupervisorMessage::Shutdown)?;
    handle.await?;
    Ok(())
}

#[tokio::test]
async fn pause_then_resume_round_trip() -> Result<(), Box<dyn Error>> {
    let (supervisor, handle) = start_supervisor(vec![Queue::new("emails")]).await?;

    let paused = pause(&supervisor, "emails").await??;
    assert_eq!(paused.status(), QueueStatus::Paused);
    let paused_at = paused.paused_at;

    // A second pause keeps the original timestamp.
    let again = pause(&supervisor, "emails").await??;
    assert_eq!(again.paused_at, paused_at);

    let listed = list(&supervisor).await?;
    assert!(listed[0].is_paused());

    let resumed = resume(&supervisor, "emails").await??;
    assert_eq!(resumed.status(), QueueStatus::Active);
    assert!(resumed.updated_at >= resumed.created_at);

    supervisor.send_message(SupervisorMessage::Shutdown)?;
    handle.await?;
    Ok(())
}

#[tokio::test]
async fn unknown_queue_reports_not_found() -> Result<(), Box<dyn Error>> {
    let (supervisor, handle) = start_supervisor(Vec::new()).await?;

    let result = pause(&supervisor, "ghost").await?;
    assert_eq!(result, Err(ActorError::QueueNotFound("ghost".to_string())));

    let (tx, rx) = concurrency::oneshot();
    supervisor.send_message(SupervisorMessage::GetQueue {
        name: "ghost".to_string(),
        reply: tx.into(),
    })?;
    assert!(rx.await?.is_none());

    supervisor.send_message(SupervisorMessage::Shutdown)?;
    handle.await?;
    Ok(())
}
