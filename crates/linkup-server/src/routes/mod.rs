pub mod blurb;
pub mod chat;
pub mod events;

use std::sync::MutexGuard;

use axum::http::StatusCode;
use axum::{Json, Router};
use linkup_schema::StoreError;
use linkup_store::EventRepository;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/chat", chat::router())
        .nest("/events", events::router())
        .nest("/blurb", blurb::router())
}

pub(crate) type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub(crate) fn store_error(error: StoreError) -> ErrorResponse {
    let status = match error {
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::EventNotFound(_) | StoreError::ConnectionIndex(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(serde_json::json!({ "error": error.to_string() })))
}

pub(crate) fn lock_repo(state: &AppState) -> Result<MutexGuard<'_, EventRepository>, ErrorResponse> {
    state.repo.lock().map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "event store is unavailable" })),
        )
    })
}
