use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
    pub create_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
}

impl AppState {
    pub fn in_memory(event_store: Arc<InMemoryEventStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateEventHandler::new(event_store.clone())),
            events: event_store,
        }
    }
}
