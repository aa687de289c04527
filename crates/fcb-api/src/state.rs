use std::time::Duration;

use sqlx::PgPool;

use crate::{ApiConfig, config::Environment};

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            environment: config.env.clone(),
            request_timeout: config.request_timeout(),
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    /// Connect to the database, run pending migrations and build the state.
    pub async fn connect(config: &ApiConfig) -> anyhow::Result<Self> {
        let pool = fcb_db::create_pool(
            &config.database_url,
            config.db_max_connections,
            config.db_acquire_timeout(),
        )
        .await?;

        fcb_db::ensure_db_and_migrate(&config.database_url, &pool).await?;
        tracing::info!("Database ready, migrations applied");

        Ok(Self::new(config, pool))
    }
}
