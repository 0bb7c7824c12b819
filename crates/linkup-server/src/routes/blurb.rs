use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_blurb).put(set_blurb))
}

#[derive(Deserialize)]
struct BlurbBody {
    blurb: String,
}

async fn get_blurb(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "blurb": state.blurbs.get() }))
}

async fn set_blurb(
    State(state): State<AppState>,
    Json(body): Json<BlurbBody>,
) -> Json<serde_json::Value> {
    state.blurbs.set(&body.blurb);
    Json(json!({ "blurb": body.blurb }))
}
