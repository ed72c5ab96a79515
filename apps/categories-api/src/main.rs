use axum_helpers::{JwtAuth, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize indexes
    api::categories::init_indexes(&db).await?;

    let jwt = JwtAuth::new(&config.jwt);

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
        jwt,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors);

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Categories API (cleanup timeout {:?})",
        state.config.server.shutdown_timeout
    );

    let server = state.config.server.clone();
    let mongo_client = state.mongo_client;

    // Production-ready server with graceful shutdown
    create_production_app(app, &server, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Categories API shutdown complete");
    Ok(())
}
