pub mod health;

use anyhow::{bail, Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Keeps 405s in the same `{"detail": ...}` shape as every other error.
async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_handler).fallback(method_not_allowed),
        )
        .route(
            "/analyze",
            post(handlers::handle_analyze).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Cross-origin policy: POST/OPTIONS from the configured origins, any request
/// header, credentials allowed.
///
/// Headers are mirrored rather than wildcarded because `*` cannot be combined
/// with credentials.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                bail!("ALLOWED_ORIGINS cannot contain '*' while credentials are allowed");
            }
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
