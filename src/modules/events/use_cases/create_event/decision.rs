use crate::modules::events::core::event::Event;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing required field: title")]
    MissingTitle,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { event: Event },
    Rejected { reason: DecideError },
}
