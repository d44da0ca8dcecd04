// The catalog's only record type.
//
// Purpose
// - Describe what an event looks like on the wire and in the store.
//
// Boundaries
// - Ids are assigned by the system, never by clients. See id_allocator.

use serde::{Deserialize, Serialize};

pub type EventId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
}

impl Event {
    pub fn new(id: EventId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
