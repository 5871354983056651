pub mod auth;
pub(crate) mod core;
pub(crate) mod routes;
pub mod store;
pub mod types;
pub(crate) mod utils;

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::core::error::{ConfigError, Error};

use crate::core::{config::Args, state::AppState};
use crate::store::PgUserRepository;

pub async fn run() -> Result<(), ConfigError> {
    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repository = PgUserRepository::connect(&config.database_url()).await?;

    sqlx::migrate!()
        .run(repository.pool())
        .await
        .map_err(ConfigError::DatabaseMigration)?;

    let state = AppState::new(Arc::new(repository), &config)?;

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(ConfigError::IO)?;

    tracing::debug!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(ConfigError::IO)?;

    Ok(())
}
