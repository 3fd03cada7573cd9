//! Beacon - minimal JSON smoke-test service.
//!
//! Exposes a welcome page, an info page, a health check and a demo
//! addition calculator, all as read-only JSON endpoints.

use tokio::net::TcpListener;

mod api;
mod config;
mod error;
mod logging;

use crate::api::build_router;
use crate::config::Config;

/// Static service metadata reported by the info and health endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ServiceMeta {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

impl ServiceMeta {
    /// Metadata from the crate manifest.
    pub fn from_manifest() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            author: env!("CARGO_PKG_AUTHORS"),
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service metadata.
    pub meta: ServiceMeta,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        // Missing .env is expected in production
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Load configuration before logging so the debug flag can shape the
    // default filter
    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    logging::init(config.debug);

    tracing::info!("Starting Beacon v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        host = %config.host,
        port = %config.port,
        debug = %config.debug,
        "Configuration loaded"
    );

    // Build application state and router
    let state = AppState {
        meta: ServiceMeta::from_manifest(),
    };
    let app = build_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
