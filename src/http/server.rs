//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::secrets::process_lookup;

use super::banner::startup_banner;
use super::shutdown::shutdown_signal;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Bind the listener for the configured address.
///
/// A bind failure is fatal: port conflicts need an operator, so there is no retry.
pub async fn bind(config: &AppConfig) -> Result<TcpListener, ServerError> {
    let addr = config.http.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Start the HTTP server based on configuration.
///
/// Binds, prints the startup banner to stdout, then blocks until a shutdown
/// signal arrives and in-flight requests complete.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "Starting HTTP server");

    println!("{}", startup_banner(local_addr.port(), process_lookup));

    serve(listener, app, shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}
