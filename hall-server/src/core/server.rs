//! Server Implementation
//!
//! HTTP 服务器启动和路由装配

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::auth::require_auth;
use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::auth::router())
        .merge(crate::api::health::router())
        // Booking site APIs
        .merge(crate::api::book_hall::router())
        .merge(crate::api::feedback::router())
        .merge(crate::api::bookings::router())
}

/// Build a fully configured application with middleware, state and
/// static-asset hosting
///
/// 静态页面 (`/`, `/menu`, `/about`, …) 从 work_dir/public 提供，
/// 评价照片从 work_dir/uploads 提供；API 全部挂在 `/api/*` 下。
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // JWT 认证中间件 - require_auth 内部会跳过公共路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state.clone())
        // 上传文件与静态页面
        .nest_service("/uploads", ServeDir::new(state.config.uploads_dir()))
        .fallback_service(ServeDir::new(state.config.public_dir()))
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = build_app(&state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("💒 Hall Booking Server listening on {}", addr);

        // Graceful shutdown on ctrl-c
        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(Duration::from_secs(10)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server failed: {e}")))
    }
}
