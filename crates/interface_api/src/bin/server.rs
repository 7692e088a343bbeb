//! Customer API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Postgres backend (default)
//! API_DATABASE_URL=postgres://... cargo run --bin customer-api
//!
//! # In-memory backend with a seeded demo customer
//! API_STORAGE=memory API_SEED_DEMO_DATA=true cargo run --bin customer-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_STORAGE` - `postgres` or `memory` (default: postgres)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! * `API_LOG_FORMAT` - `text` or `json` (default: text)
//! * `API_SEED_DEMO_DATA` - Register one random customer at startup (default: false)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_customer::{CustomerPort, CustomerService, InMemoryCustomerPort};
use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresCustomerAdapter};
use interface_api::config::{ApiConfig, LogFormat, StorageBackend};
use interface_api::{create_router, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Invalid API_* configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = ?config.storage,
        "Starting customer API server"
    );

    let port = build_port(&config).await?;
    let service = CustomerService::new(port);

    if config.seed_demo_data {
        seed::seed_demo_customer(&service)
            .await
            .context("Failed to seed demo data")?;
    }

    let app = create_router(service, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over `log_level` when both are set.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (json, text) = match format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Text => (None, Some(tracing_subscriber::fmt::layer().with_target(true))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

/// Builds the storage port selected by `config.storage`.
///
/// The Postgres backend connects and applies pending migrations first.
async fn build_port(config: &ApiConfig) -> anyhow::Result<Arc<dyn CustomerPort>> {
    match config.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::new(config.database_url.clone())
                .max_connections(config.db_max_connections);

            let pool = create_pool(db_config)
                .await
                .context("Failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("Failed to apply migrations")?;

            Ok(Arc::new(PostgresCustomerAdapter::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryCustomerPort::with_sample_data()))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
