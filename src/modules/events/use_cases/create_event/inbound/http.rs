use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::handler::ApplicationError;
use crate::shared::http::ErrorResponse;
use crate::shell::state::AppState;

// A body that is missing, not JSON, or not an object reads as `{}`, and a
// title that is not a string reads as absent. Neither surfaces as a 4xx of
// its own; both end up as the missing-title rejection.
fn command_from_body(body: Result<Json<Value>, JsonRejection>) -> CreateEvent {
    let title = body.ok().and_then(|Json(payload)| match payload {
        Value::Object(mut fields) => match fields.remove("title") {
            Some(Value::String(title)) => Some(title),
            _ => None,
        },
        _ => None,
    });
    CreateEvent { title }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let command = command_from_body(body);

    match state.create_handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(ApplicationError::Domain(reason)) => {
            ErrorResponse::new(reason.to_string()).with_status(StatusCode::BAD_REQUEST)
        }
        Err(ApplicationError::Store(err)) => {
            tracing::error!(error = %err, "event store failed while creating an event");
            ErrorResponse::new(err.to_string()).with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
