//! Health API 模块

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health - 存活探针
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
