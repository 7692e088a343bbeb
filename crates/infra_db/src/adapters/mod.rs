//! Domain Adapters
//!
//! Implementations of domain ports on top of the PostgreSQL repositories.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresCustomerAdapter;
//! use domain_customer::CustomerPort;
//!
//! let port: Arc<dyn CustomerPort> = Arc::new(PostgresCustomerAdapter::new(pool));
//! ```

pub mod customer;

pub use customer::PostgresCustomerAdapter;
