// In memory implementation of the EventStore port.
//
// Purpose
// - Back the running service; events live as long as the process does.
//
// Responsibilities
// - Keep events in insertion order.
// - Refuse to append an event whose id is already stored.

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::Event;
use tokio::sync::RwLock;

pub const SEED_TITLES: [&str; 2] = ["Tech Meetup", "Python Workshop"];

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
            is_offline: false,
        }
    }

    /// Store pre-filled with the catalog's two starter events, ids 1 and 2.
    pub fn seeded() -> Self {
        Self::with_events(
            (1..)
                .zip(SEED_TITLES)
                .map(|(id, title)| Event::new(id, title))
                .collect(),
        )
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }

        Ok(self.events.read().await.clone())
    }

    async fn append(&self, event: Event) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }

        let mut guard = self.events.write().await;
        if guard.iter().any(|existing| existing.id == event.id) {
            return Err(EventStoreError::DuplicateId(event.id));
        }
        guard.push(event);
        Ok(())
    }
}
