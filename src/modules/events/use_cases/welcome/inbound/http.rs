use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Event Catalog API!";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

pub async fn handle() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(WelcomeResponse {
            message: WELCOME_MESSAGE,
        }),
    )
}
