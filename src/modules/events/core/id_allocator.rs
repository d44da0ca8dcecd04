// Derives the id of the next event from what is currently stored.
//
// Only sound while events are never deleted: removing the event holding the
// maximum id would let its id be handed out again.

use crate::modules::events::core::event::{Event, EventId};

pub const FIRST_EVENT_ID: EventId = 1;

pub fn next_event_id(current: &[Event]) -> EventId {
    current
        .iter()
        .map(|event| event.id)
        .max()
        .map_or(FIRST_EVENT_ID, |max| max + 1)
}
