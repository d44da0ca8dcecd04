// Intent to add an event to the catalog.
//
// The title is carried untrimmed; `None` means the client sent no usable
// title at all (missing, null, or not a string).

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateEvent {
    pub title: Option<String>,
}

impl CreateEvent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}
