use axum::{
    extract::DefaultBodyLimit, http::Method, middleware as axum_middleware, routing::post,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

use state::AppState;

/// Largest reset event body the logger will buffer.
pub const MAX_RESET_EVENT_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Builds the full HTTP surface with shared layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/log-password-reset",
            post(handlers::password_reset::log_password_reset)
                .layer(DefaultBodyLimit::max(MAX_RESET_EVENT_BODY_BYTES)),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::log_error_responses))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::POST, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
