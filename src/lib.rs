//! envcheck: a diagnostic HTTP server that confirms deployment secrets are
//! present in the process environment.
//!
//! Routes: `/health` (liveness), `/secrets` (presence report for the tracked
//! variables plus every visible variable name) and `/` (landing page).
//! Everything else is a JSON 404.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod secrets;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
