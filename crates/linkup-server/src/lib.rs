pub mod routes;
pub mod state;

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

/// Assemble the full application router: every route lives under `/api`.
/// CORS is wide open because the caller is a Telegram-hosted webview whose
/// origin we do not control.
pub fn create_router(state: AppState) -> Router {
    let api = routes::api_router().with_state(state);
    Router::new()
        .nest("/api", api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "linkup api listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
