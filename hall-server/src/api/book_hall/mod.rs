//! Book Hall API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/book_hall", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::prefill).post(handler::submit))
}
