//! CORS middleware driven by the `cors_url` setting.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS layer for the configured origin.
///
/// `*` allows any origin. Anything else is treated as the single allowed
/// origin; an origin that is not a valid header value disables cross-origin
/// access.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api/v1", api_routes(state.clone()))
///     .layer(cors::layer(&config.cors_url));
/// ```
pub fn layer(cors_url: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if cors_url == "*" {
        return base.allow_origin(Any);
    }

    match HeaderValue::from_str(cors_url) {
        Ok(origin) => base.allow_origin(AllowOrigin::exact(origin)),
        Err(_) => {
            tracing::warn!("CORS_URL '{}' is not a valid origin; CORS disabled", cors_url);
            base.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        }
    }
}
