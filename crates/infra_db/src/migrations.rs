//! Embedded schema migrations
//!
//! The SQL files under the workspace `migrations/` directory are compiled
//! into the binary and applied at startup.

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies all pending migrations
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Running database migrations");
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
