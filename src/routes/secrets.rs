//! Secret presence endpoint.

use axum::response::IntoResponse;
use http::header::{HeaderValue, CONTENT_TYPE};
use tracing::instrument;

use crate::error::AppError;
use crate::secrets::SecretsReport;

/// Reports which tracked secrets are set, pretty-printed with two-space indent.
///
/// The environment is re-read on every call so a secret injected after startup
/// shows up without a restart.
#[instrument(name = "secrets::report")]
pub async fn report() -> Result<impl IntoResponse, AppError> {
    let report = SecretsReport::collect();

    for (name, status) in report.environment.iter() {
        tracing::debug!(var = name, exists = status.exists(), "Inspected tracked variable");
    }

    let body = serde_json::to_string_pretty(&report)?;
    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    ))
}
