//! Timesheet Engine HTTP server.
//!
//! Environment:
//! - `TIMESHEET_CONFIG_DIR`: directory holding `settings.yaml` (default `./config/default`)
//! - `TIMESHEET_BIND`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use tracing::info;
use tracing_subscriber::EnvFilter;

use timesheet_engine::api::{create_router, AppState};
use timesheet_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("TIMESHEET_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("TIMESHEET_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, config_dir = %config_dir, "Timesheet engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}
