//! TripAdvisor relay service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ axum router ──▶ handler ──▶ TravelApi ──▶ TripAdvisor Content API
//!                  │                │
//!                  │                └─ 400 / 503 / 500 error envelope
//!                  └─ request ID, trace span
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use travel_relay::config::{load_dotenv, ConfigError, RelayConfig};
use travel_relay::lifecycle::shutdown_signal;
use travel_relay::observability::{logging, metrics};
use travel_relay::RelayServer;

#[derive(Parser)]
#[command(name = "travel-relay")]
#[command(about = "HTTP relay for the TripAdvisor Content API", long_about = None)]
struct Cli {
    /// Listen port (overrides TRIPADVISOR_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Dotenv file to load instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<RelayConfig, ConfigError> {
    let mut config = RelayConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
        config.validate()?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Dotenv first so RUST_LOG from the file reaches the subscriber.
    let dotenv = load_dotenv(cli.env_file.as_deref());
    logging::init_logging();

    tracing::info!("travel-relay v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match dotenv.and_then(|()| load_config(&cli)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if !config.has_api_key() {
        tracing::warn!("TRIPADVISOR_API_KEY is not set; API routes will return 503");
    }

    tracing::info!(bind_address = %config.bind_address(), "Configuration loaded");

    if let Some(addr) = config.metrics_address {
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = RelayServer::new(config);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
