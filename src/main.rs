//! `stay-engine` server binary.

use std::error::Error;

use stay_engine::api::{AppState, create_router};
use stay_engine::config::ConfigLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/storefront";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stay_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("STAY_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        config_dir = %config_dir,
        storefront = %config.engine().name,
        rooms = config.rooms().len(),
        "Configuration loaded"
    );

    let bind_address = config.server().bind_address.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Starting server on {bind_address}");
    axum::serve(listener, app).await?;

    Ok(())
}
