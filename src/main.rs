//! # GrubDash
//!
//! Starts the dish and order actors and serves them over HTTP until Ctrl-C.
//!
//! Configuration comes from `GRUBDASH_*` variables, see
//! [`Config`](grubdash::lifecycle::Config).

use grubdash::http::{self, AppState};
use grubdash::lifecycle::{setup_tracing, Config, RestaurantSystem};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);
    info!(?config, "Starting GrubDash");

    let system = RestaurantSystem::from_config(&config)?;
    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;

    http::serve(listener, AppState::from_system(&system), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
        }
        info!("Ctrl-C received");
    })
    .await?;

    system.shutdown().await?;
    Ok(())
}
