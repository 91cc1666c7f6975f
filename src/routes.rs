//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check (public)
//! - `/api/v1/*`    - REST API (bearer access token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin taken from `cors_url`
//! - **Authentication** - Per-group token and role guards
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without path normalization.
pub fn app_routes(state: AppState) -> Router {
    let cors = cors::layer(&state.config.cors_url);
    let api_router = api::routes::api_routes(state.clone());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state))
}
