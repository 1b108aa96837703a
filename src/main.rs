use clap::Parser;
use froggy_pies::config::ServerConfig;
use froggy_pies::lifecycle::{setup_tracing, RecipeSystem};
use froggy_pies::{api, seed};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    setup_tracing(&config.log);

    info!(bind = %config.bind, "Starting froggy-pies");

    let system = RecipeSystem::new(config.channel_capacity as usize);

    if config.seed {
        seed::load_starter_recipes(&system.recipe_client).await?;
    }

    let app = api::router(system.recipe_client.clone());
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
