use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use linkup_provider::LlmRequest;
use linkup_schema::{ChatMessage, Connection, Sender, StoreError};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use super::{lock_repo, store_error, ErrorResponse};
use crate::state::AppState;

pub const SYSTEM_PROMPT: &str =
    "You are an event assistant AI. Answer based on the provided contacts.";

/// Shown in place of a reply when the provider call fails. The transcript
/// still records the turn so the conversation can continue.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, the AI assistant is unavailable right now. Please try again.";

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(proxy_chat))
}

#[derive(Deserialize)]
struct ProxyChatBody {
    message: String,
    #[serde(default)]
    contacts: Vec<Connection>,
}

#[derive(Deserialize)]
pub(super) struct EventChatBody {
    message: String,
}

fn compose_prompt(message: &str, contacts: &[Connection]) -> String {
    let contacts_json = serde_json::to_string(contacts).unwrap_or_else(|_| "[]".into());
    format!("Contacts: {contacts_json}\nUser: {message}")
}

/// The original proxy contract: contacts arrive in the request body and
/// provider failure is the caller's problem (500 with a fixed error body).
async fn proxy_chat(
    State(state): State<AppState>,
    Json(body): Json<ProxyChatBody>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let request = LlmRequest::simple(
        state.model.clone(),
        Some(SYSTEM_PROMPT.into()),
        compose_prompt(&body.message, &body.contacts),
    );
    match state.provider.chat(request).await {
        Ok(resp) => Ok(Json(json!({ "aiMessage": resp.text }))),
        Err(error) => {
            warn!(%error, "chat completion failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to get AI response" })),
            ))
        }
    }
}

/// Event-scoped assistant: the event's own connections are the context and
/// both turns land in the transcript. Provider failure degrades to the
/// fixed fallback reply instead of an error status.
pub(super) async fn event_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<EventChatBody>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let contacts: Vec<Connection> = {
        let repo = lock_repo(&state)?;
        let event = repo
            .event(id)
            .ok_or_else(|| store_error(StoreError::EventNotFound(id)))?;
        event.connections.clone()
    };

    state
        .transcripts
        .append(id, Sender::User, &body.message)
        .map_err(store_error)?;

    let request = LlmRequest::simple(
        state.model.clone(),
        Some(SYSTEM_PROMPT.into()),
        compose_prompt(body.message.trim(), &contacts),
    );
    let reply = match state.provider.chat(request).await {
        Ok(resp) => resp.text,
        Err(error) => {
            warn!(%error, %id, "assistant call failed, using fallback reply");
            FALLBACK_MESSAGE.to_string()
        }
    };

    if let Err(error) = state.transcripts.append(id, Sender::Ai, &reply) {
        warn!(%error, %id, "dropping unrecordable assistant reply");
    }
    Ok(Json(json!({ "aiMessage": reply })))
}

pub(super) async fn event_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<Vec<ChatMessage>> {
    Json(state.transcripts.history(id))
}
