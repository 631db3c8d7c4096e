//! Marquee movie catalog server.
//!
//! Serves the catalog over HTTP from a SQLite database or, for throwaway
//! sessions, from memory.

use clap::Parser;
use marquee_persistence::backends::memory::MemoryBackend;
use marquee_rest::{ServerConfig, StorageKind, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "sqlite")]
use marquee_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    info!(database = %config.database_url, "Initializing SQLite backend");

    let backend = SqliteBackend::with_config(&config.database_url, SqliteBackendConfig::default())?;
    backend.init_schema()?;

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        storage = %config.storage,
        "Starting Marquee"
    );

    match config.storage {
        StorageKind::Sqlite => start_sqlite(config).await,
        StorageKind::Memory => start_memory(config).await,
    }
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p marquee --features sqlite, or run with --storage memory"
    )
}

/// Starts the server with the in-memory backend. Nothing survives a restart.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    info!("Using in-memory storage");
    let app = create_app_with_config(MemoryBackend::new(), config.clone());
    serve(app, &config).await
}
