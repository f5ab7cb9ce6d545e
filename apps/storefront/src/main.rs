use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // The client connects lazily: the page reports the outage per request
    // and /ready reports it to the orchestrator.
    let mongo_client = database::mongodb::client_from_config(&config.mongodb).await?;
    let state = AppState::new(config, mongo_client);

    info!(
        database = state.config.mongodb.database(),
        collection = %state.config.products_collection,
        featured_seed = ?state.config.featured_seed,
        public_dir = %state.config.public_dir.display(),
        "Storefront configured"
    );

    let app = api::app(&state);

    let shutdown_timeout = state.config.server.shutdown_timeout;
    info!(
        "Starting storefront with graceful shutdown ({:?} timeout)",
        shutdown_timeout
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        // MongoDB client closes automatically on drop
        drop(state);
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Storefront shutdown complete");
    Ok(())
}
