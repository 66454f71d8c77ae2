mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_database {
        startup::seed_database(&db).await?;
    }

    let listener = tokio::net::TcpListener::bind(config.address()).await?;

    tracing::info!("Starting server on {}", config.address());

    axum::serve(listener, router::app(AppState::new(db))).await?;

    Ok(())
}
