//! Planet Tracker HTTP Server Binary
//!
//! Entry point for the planet tracker web server. It loads the SPK
//! ephemeris kernel, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! EPHEMERIS_PATH=de421.bsp cargo run --bin planet-tracker-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `EPHEMERIS_PATH`: SPK kernel file (default: de421.bsp)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use planet_tracker::config::ServerConfig;
use planet_tracker::ephemeris::SpkEphemeris;
use planet_tracker::http::{create_router, AppState};

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
        .init();

    info!("Starting Planet Tracker HTTP Server");

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // The ephemeris is a startup dependency: a missing or truncated kernel
    // aborts here instead of failing per request.
    let ephemeris = SpkEphemeris::load(&config.ephemeris_path)?;
    info!("Ephemeris kernel loaded from {}", config.ephemeris_path);

    let state = AppState::new(Arc::new(ephemeris));
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
