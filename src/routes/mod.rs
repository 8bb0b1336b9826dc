//! HTTP route handlers.
//!
//! Three fixed paths plus a JSON 404 fallback. Routes use `any` so the
//! request method is never inspected: a POST to `/health` is answered exactly
//! like a GET. Matching is on the exact request target, so `/health/`,
//! `/health/extra` and `/health?x=1` all get the 404 response.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod secrets;

use axum::{middleware, response::Response, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error;
use crate::middleware::{exact_target_layer, request_id_layer};
use crate::state::AppState;

/// Fallback for every path not routed below.
pub async fn not_found() -> Response {
    error::not_found()
}

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health::health))
        .route("/secrets", any(secrets::report))
        .route("/", any(home::index))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(exact_target_layer))
        // Diagnostic output must never be served from a cache
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
