use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use linkup_core::{build_export, group_by_status, is_valid_profile_link, ExportBundle};
use linkup_schema::{Connection, Event, LeadStatus, StoreError};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{chat, lock_repo, store_error, ErrorResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}/connections", post(add_connection))
        .route("/{id}/connections/{index}", delete(remove_connection))
        .route("/{id}/connections/{index}/status", put(set_status))
        .route("/{id}/board", get(board))
        .route("/{id}/export", get(export))
        .route("/{id}/chat", get(chat::event_history).post(chat::event_chat))
}

#[derive(Deserialize)]
struct CreateEventBody {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddConnectionBody {
    user_link: String,
    #[serde(default)]
    notes: String,
}

#[derive(Deserialize)]
struct SetStatusBody {
    status: String,
}

#[derive(Deserialize)]
struct ExportQuery {
    date: String,
}

async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ErrorResponse> {
    let repo = lock_repo(&state)?;
    Ok(Json(repo.list_events().to_vec()))
}

async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<CreateEventBody>,
) -> Result<(StatusCode, Json<Event>), ErrorResponse> {
    let mut repo = lock_repo(&state)?;
    let event = repo.create_event(&body.name).map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn add_connection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AddConnectionBody>,
) -> Result<(StatusCode, Json<Connection>), ErrorResponse> {
    // The QR boundary: only payloads the validator accepts become
    // connections.
    if !is_valid_profile_link(&body.user_link) {
        return Err(store_error(StoreError::Validation(
            "not a Telegram profile link".into(),
        )));
    }
    let mut repo = lock_repo(&state)?;
    let connection = repo
        .add_connection(id, body.user_link.trim(), &body.notes)
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(connection)))
}

async fn remove_connection(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let mut repo = lock_repo(&state)?;
    repo.remove_connection(id, index).map_err(store_error)?;
    Ok(Json(json!({ "status": "removed" })))
}

async fn set_status(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(body): Json<SetStatusBody>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let status: LeadStatus = body.status.parse().map_err(store_error)?;
    let mut repo = lock_repo(&state)?;
    repo.set_status(id, index, status).map_err(store_error)?;
    Ok(Json(json!({ "status": status })))
}

async fn board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let repo = lock_repo(&state)?;
    let event = repo
        .event(id)
        .ok_or_else(|| store_error(StoreError::EventNotFound(id)))?;
    let columns: Vec<serde_json::Value> = group_by_status(&event.connections)
        .into_iter()
        .map(|(status, connections)| json!({ "status": status, "connections": connections }))
        .collect();
    Ok(Json(json!({ "eventId": id, "columns": columns })))
}

async fn export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Json<ExportBundle>, ErrorResponse> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        store_error(StoreError::Validation(format!(
            "invalid date: {}",
            query.date
        )))
    })?;
    let repo = lock_repo(&state)?;
    let event = repo
        .event(id)
        .ok_or_else(|| store_error(StoreError::EventNotFound(id)))?;
    Ok(Json(build_export(event, date)))
}
