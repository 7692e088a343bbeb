//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! customer backend test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built customers and requests
//! - `builders`: Builder for customer test data
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for domain results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
