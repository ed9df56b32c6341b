use std::time::Duration;

use anyhow::Result;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use shared_config::AppConfig;
use shared_models::error::AppError;

pub mod schema;

/// Shared per-process state: configuration plus the connection pool. Built
/// once at startup and injected into every cell router; nothing else holds
/// authoritative data between requests.
pub struct AppState {
    pub config: AppConfig,
    pub db: MySqlPool,
}

/// Connect the bounded pool (source behavior: 10 connections) with an acquire
/// timeout so a saturated pool surfaces an error instead of waiting forever.
pub async fn connect(config: &AppConfig) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}

/// Lazy pool for tests that exercise the pre-store request path only.
pub fn connect_lazy(config: &AppConfig) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy(&config.database_url)?;

    Ok(pool)
}

/// Map a store failure to the generic 500. The diagnostic goes to the log
/// only; clients never see driver-level detail.
pub fn db_error(err: sqlx::Error) -> AppError {
    tracing::error!("database error: {}", err);
    AppError::Internal("Erro interno do servidor".to_string())
}
