use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::id_allocator::next_event_id;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decide::decide_create;
use crate::modules::events::use_cases::create_event::decision::{DecideError, Decision};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

/// Creates events one at a time.
///
/// Id allocation reads the store and then appends to it, so two creates
/// running side by side could pick the same id. The writer gate makes every
/// create wait for the previous one to finish.
pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    writer_gate: Mutex<()>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self {
            event_store,
            writer_gate: Mutex::new(()),
        }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let _writer = self.writer_gate.lock().await;

        let current = self.event_store.list().await?;
        let next_id = next_event_id(&current);

        match decide_create(command, next_id) {
            Decision::Accepted { event } => {
                self.event_store.append(event.clone()).await?;
                tracing::info!(id = event.id, title = %event.title, "event created");
                Ok(event)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "event creation rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
