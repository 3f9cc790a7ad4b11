//! Feedback API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/feedback", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // 访客: 最近评价 + 提交
        .route("/", get(handler::list_recent).post(handler::submit))
        // 管理员: 全量记录 (认证中间件拦截)
        .route("/all", get(handler::list_all))
}
