//! Lible HTTP Server Binary
//!
//! This is the main entry point for the Lible REST API server.
//! It initializes the repository, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin lible-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Storage backend (default: local; `repository.toml`
//!   is consulted when the variable is unset)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lible::db::{RepositoryConfig, RepositoryFactory, RepositoryType};
use lible::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Lible HTTP Server");

    // Pick the repository backend: env var first, config file second,
    // local fallback.
    let repo_type = if env::var("REPOSITORY_TYPE").is_ok() {
        RepositoryType::from_env()
    } else {
        RepositoryConfig::from_default_location()
            .and_then(|config| config.repository_type())
            .unwrap_or(RepositoryType::Local)
    };
    let repository = RepositoryFactory::create(repo_type)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Repository initialized successfully ({:?})", repo_type);

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
