// Pure decision function for event creation.
//
// Responsibilities
// - Reject a command without a title, or with a title that is blank after trimming.
// - Otherwise build the event from the allocated id and the trimmed title.
// - Never perform input or output.

use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decision::{DecideError, Decision};

pub fn decide_create(command: CreateEvent, next_id: EventId) -> Decision {
    let title = command
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty());

    match title {
        Some(title) => Decision::Accepted {
            event: Event::new(next_id, title),
        },
        None => Decision::Rejected {
            reason: DecideError::MissingTitle,
        },
    }
}
