// End to end scenarios against the full router: seeded store, CORS and
// tracing layers included, no TCP listener.

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    router(AppState::in_memory(Arc::new(InMemoryEventStore::seeded())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_events(body: &str) -> Request<Body> {
    Request::post("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn welcome_does_not_depend_on_store_state(app: Router) {
    let (status, before) = send(&app, get("/")).await;
    send(&app, post_events(r#"{"title":"Tech Meetup"}"#)).await;
    let (_, after) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, json!({"message": "Welcome to the Event Catalog API!"}));
    assert_eq!(before, after);
}

#[rstest]
#[tokio::test]
async fn created_events_are_listed_after_the_seeds_in_order(app: Router) {
    for title in ["Tech Meetup", "  Launch Party  ", "Rust Night"] {
        let (status, _) = send(&app, post_events(&json!({ "title": title }).to_string())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&app, get("/events")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"id": 1, "title": "Tech Meetup"},
            {"id": 2, "title": "Python Workshop"},
            {"id": 3, "title": "Tech Meetup"},
            {"id": 4, "title": "Launch Party"},
            {"id": 5, "title": "Rust Night"}
        ])
    );
}

#[rstest]
#[tokio::test]
async fn first_create_on_a_fresh_store_gets_id_three(app: Router) {
    let (status, json) = send(&app, post_events(r#"{"title": "Tech Meetup"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json, json!({"id": 3, "title": "Tech Meetup"}));
}

#[rstest]
#[case(r#"{}"#)]
#[case(r#"{"title": "   "}"#)]
#[case("{not json")]
#[tokio::test]
async fn rejected_creates_leave_the_store_unchanged(app: Router, #[case] body: &str) {
    let (_, before) = send(&app, get("/events")).await;

    let (status, json) = send(&app, post_events(body)).await;
    let (_, after) = send(&app, get("/events")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Missing required field: title"}));
    assert_eq!(before, after);
}

#[rstest]
#[tokio::test]
async fn titles_are_stored_trimmed(app: Router) {
    let (status, json) = send(&app, post_events(r#"{"title": "  Launch Party  "}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["title"], "Launch Party");
}

#[rstest]
#[tokio::test]
async fn create_without_a_body_is_a_missing_title(app: Router) {
    let (status, json) = send(
        &app,
        Request::post("/events").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Missing required field: title"}));
}

#[rstest]
#[tokio::test]
async fn listing_is_idempotent(app: Router) {
    let (_, first) = send(&app, get("/events")).await;
    let (_, second) = send(&app, get("/events")).await;
    assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn every_new_id_exceeds_all_ids_present_at_creation(app: Router) {
    let mut seen = HashSet::new();
    for n in 0..10 {
        let (_, listed) = send(&app, get("/events")).await;
        let max_before = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|event| event["id"].as_u64().unwrap())
            .max()
            .unwrap();

        let body = json!({ "title": format!("Event {n}") }).to_string();
        let (_, created) = send(&app, post_events(&body)).await;
        let id = created["id"].as_u64().unwrap();

        assert!(id > max_before);
        assert!(seen.insert(id));
    }
}

#[rstest]
#[tokio::test]
async fn any_origin_may_call_the_api(app: Router) {
    let response = app
        .oneshot(
            Request::get("/events")
                .header(header::ORIGIN, "https://catalog.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[rstest]
#[tokio::test]
async fn cors_preflight_for_create_is_answered(app: Router) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/events")
                .header(header::ORIGIN, "https://catalog.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[rstest]
#[tokio::test]
async fn unsupported_methods_fall_through_to_the_framework(app: Router) {
    let response = app
        .oneshot(Request::delete("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
