mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenKeys, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_if_enabled(&db, &config).await?;

    let state = AppState::new(
        db,
        TokenKeys::new(&config.jwt_secret, config.jwt_ttl),
        config.schedule,
    )
    .with_internal_details(!config.environment.is_production());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        "Starting server on port {} ({:?})",
        config.port,
        config.environment
    );

    axum::serve(listener, router::app(state)).await?;

    Ok(())
}
