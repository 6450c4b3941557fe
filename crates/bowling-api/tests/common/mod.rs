//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bowling_core::id::{AtomicIdGenerator, IdGenerator};
use bowling_core::store::InMemoryGameStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bowling_api::routes;
use bowling_api::state::AppState;

/// Fresh registry state: ids start at 1, no games stored.
pub fn test_app_state() -> AppState {
    app_state_with_ids(Arc::new(AtomicIdGenerator::new()))
}

/// Registry state with a custom id generator.
pub fn app_state_with_ids(id_generator: Arc<dyn IdGenerator>) -> AppState {
    AppState::new(id_generator, Arc::new(InMemoryGameStore::new()))
}

/// Build the full app router over `app_state`. Uses the same route structure
/// as `main.rs`. Clone the state to issue several requests against the same
/// registry.
pub fn build_test_app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/games", routes::games::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Start a ten-pin game and return its id.
pub async fn start_game(app_state: &AppState, player_names: &[&str]) -> i64 {
    let (status, json) = post_json(
        build_test_app(app_state.clone()),
        "/api/v1/games",
        &serde_json::json!({ "game_type": "ten_pin", "player_names": player_names }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "start_game failed: {json}");
    json["game_id"].as_i64().unwrap()
}

/// Record rolls for a player and return the response.
pub async fn roll(
    app_state: &AppState,
    game_id: i64,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_json(
        build_test_app(app_state.clone()),
        &format!("/api/v1/games/{game_id}/rolls"),
        &body,
    )
    .await
}

/// Advance the game to the next frame and return the new frame index.
pub async fn next_frame(app_state: &AppState, game_id: i64) -> i64 {
    let (status, json) = post_json(
        build_test_app(app_state.clone()),
        &format!("/api/v1/games/{game_id}/next-frame"),
        &serde_json::Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["current_frame"].as_i64().unwrap()
}
