//! Landing page handler.

use axum::{extract::State, response::Html};
use serde::Serialize;
use tracing::instrument;

use crate::config::TRACKED_VARS;
use crate::error::AppError;
use crate::state::AppState;
use crate::templates::INDEX_TEMPLATE;

pub const PAGE_TITLE: &str = "Environment Check Server";

/// An endpoint advertised on the landing page and in the startup banner.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub description: &'static str,
}

pub const ENDPOINTS: [Endpoint; 3] = [
    Endpoint {
        path: "/health",
        description: "Health check endpoint",
    },
    Endpoint {
        path: "/secrets",
        description: "Check if environment variables (secrets) are loaded",
    },
    Endpoint {
        path: "/",
        description: "This page",
    },
];

/// Landing page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let tracked: Vec<&str> = TRACKED_VARS.iter().map(|v| v.name).collect();

    let mut context = tera::Context::new();
    context.insert("title", PAGE_TITLE);
    context.insert("port", &state.config.http.port);
    context.insert("endpoints", &ENDPOINTS);
    context.insert("tracked", &tracked);

    let html = state.tera.render(INDEX_TEMPLATE, &context)?;
    Ok(Html(html))
}
