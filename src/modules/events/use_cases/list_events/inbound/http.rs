use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::shared::http::ErrorResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.list().await {
        Ok(events) => {
            tracing::debug!(count = events.len(), "listing events");
            Json(events).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "event store failed while listing events");
            ErrorResponse::new(err.to_string()).with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
