//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL backend for the customer domain using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern:
//!
//! - **repositories**: SQL access returning row types (`CustomerRepository`)
//! - **adapters**: implementations of domain ports on top of the repositories
//!   (`PostgresCustomerAdapter` implements `CustomerPort`)
//! - **migrations**: the embedded schema under `/migrations`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresCustomerAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/customers")).await?;
//! run_migrations(&pool).await?;
//! let port = PostgresCustomerAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use repositories::CustomerRepository;
pub use adapters::PostgresCustomerAdapter;
