//! HTTP server module.
//!
//! Binds the plain-HTTP listener, prints the startup banner, and serves the
//! router until SIGTERM/SIGINT triggers a graceful shutdown.

mod banner;
mod server;
mod shutdown;

pub use banner::startup_banner;
pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
