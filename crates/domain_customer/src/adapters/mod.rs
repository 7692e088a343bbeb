//! Storage adapters shipped with the customer domain
//!
//! - **InMemoryCustomerPort**: volatile list-backed store, used for local runs
//!   and as the test double for the service
//!
//! The PostgreSQL adapter lives in `infra_db::adapters`.

pub mod in_memory;

pub use in_memory::InMemoryCustomerPort;
