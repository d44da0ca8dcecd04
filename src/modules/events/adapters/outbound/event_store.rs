// Port for the authoritative collection of events.
//
// Responsibilities
// - Hand out every stored event in insertion order.
// - Append new events at the end, refusing ids that are already taken.

use crate::modules::events::core::event::{Event, EventId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("event id {0} is already taken")]
    DuplicateId(EventId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError>;
    async fn append(&self, event: Event) -> Result<(), EventStoreError>;
}
