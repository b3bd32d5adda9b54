//! # forecast server
//!
//! REST API exposing a pre-trained consumption regression model.
//! Artifacts are located and loaded once at startup; every request after
//! that only touches the in-memory bundle.

use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    // Artifacts must load before the listener exists; a missing or corrupt
    // model aborts startup here.
    let artifact_dir = env::var("ARTIFACT_DIR").unwrap_or_else(|_| ".".to_string());
    let bundle = artifact::load(Path::new(&artifact_dir))
        .with_context(|| format!("loading artifacts from '{artifact_dir}'"))?;
    let state = AppState::new(bundle);

    let app = routes::app(state);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid number")?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid HOST:PORT configuration")?;

    tracing::info!(
        "forecast server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
