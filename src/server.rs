use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::config::Config;
use crate::handlers;
use crate::llm::ProviderRegistry;

/// Shared application state. Immutable after startup, so concurrent
/// requests share it freely.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub providers: ProviderRegistry,
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/chat", post(handlers::chat))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
