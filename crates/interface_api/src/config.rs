//! API configuration
//!
//! Loaded from `API_*` environment variables (for example `API_PORT=8080`,
//! `API_STORAGE=memory`). Unset variables fall back to the defaults below.

use serde::Deserialize;

/// Storage backend behind the customer port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL through `infra_db`
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL, used when `storage` is `postgres`
    pub database_url: String,
    /// Log filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Storage backend
    pub storage: StorageBackend,
    /// Register one random customer at startup
    pub seed_demo_data: bool,
    /// Upper bound of the database pool
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/customer".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            storage: StorageBackend::Postgres,
            seed_demo_data: false,
            db_max_connections: 10,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("API").try_parsing(true))
    }

    /// Loads configuration from an arbitrary source layered over the defaults
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?
            .set_default("database_url", defaults.database_url)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .set_default("storage", "postgres")?
            .set_default("seed_demo_data", defaults.seed_demo_data)?
            .set_default("db_max_connections", defaults.db_max_connections as i64)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
