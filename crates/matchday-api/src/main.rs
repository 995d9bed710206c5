//! Matchday API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p matchday-api
//! ```
//!
//! Configuration is loaded from environment variables (or a .env file).

use matchday_common::{init_telemetry, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before telemetry so the environment picks the format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_telemetry(config.app.env);

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = matchday_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
