//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it only proves the process can answer HTTP. It does not
//! look at the tracked secrets, so a missing secret never fails the probe.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
