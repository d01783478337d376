//! Common routes: root banner, health, version, and the 404 fallback.

use crate::response::{message, MessageBody};
use axum::{
    extract::OriginalUri,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Bug Tracker API is running".into(),
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for any unmatched path or method.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<MessageBody>) {
    tracing::debug!(path = %uri.path(), "no route");
    message(StatusCode::NOT_FOUND, format!("Not Found - {}", uri.path()))
}

/// GET /, GET /health, GET /version. No state.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/version", get(version))
}
