//! envcheck: environment secrets check server.
//!
//! This is the application entry point. It initializes tracing, reads
//! configuration from the environment, compiles the templates, builds the
//! Axum router and serves it until a shutdown signal arrives.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envcheck::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV};
use envcheck::http::start_server;
use envcheck::routes::create_router;
use envcheck::state::AppState;
use envcheck::templates::init_templates;

/// envcheck: verify that deployment secrets are injected
#[derive(Parser, Debug)]
#[command(name = "envcheck", version, about)]
struct Args {
    /// Log level filter (e.g., "envcheck=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    // Logs go to stderr; stdout carries the startup banner
    let (text, json) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter))
        .with(text)
        .with(json)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let log_format = LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
    init_tracing(&log_filter, log_format);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing::info!(port = config.http.port, "Loaded configuration");

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    start_server(app, &config).await?;
    Ok(())
}
