use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Deployment environment, selects log format and production-only headers
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Service configuration, read from environment variables
///
/// | Variable | Default |
/// |---|---|
/// | `DATABASE_URL` | required |
/// | `ENV` | `development` |
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `3000` |
/// | `DB_MAX_CONNECTIONS` | `10` |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `5` |
/// | `REQUEST_TIMEOUT_SECS` | `30` |
/// | `ALLOWED_ORIGINS` | empty, any origin allowed |
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub database_url: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Comma separated list of origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_db_max_connections() -> u32 {
    10
}

const fn default_db_acquire_timeout_secs() -> u64 {
    5
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        envy::from_env::<Self>().context("failed to load configuration from environment")
    }

    /// Build the configuration from explicit `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars).context("invalid configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub const fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }
}
