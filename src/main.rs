//! Notes API server.
//!
//! ```text
//! Client ─▶ request id ─▶ trace ─▶ cors ─▶ limits ─▶ handlers ─▶ NoteStore
//!                                                                 (Mutex<Vec<Note>>)
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use notes_api::config::load_config;
use notes_api::observability::{logging, metrics};
use notes_api::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "notes-api")]
#[command(about = "In-memory notes REST API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("notes-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
