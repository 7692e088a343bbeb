//! Repository implementations
//!
//! Repositories encapsulate SQL queries and return plain row types. Mapping
//! rows to domain records is the adapters' job.

pub mod customer;

pub use customer::{CustomerRepository, CustomerRow, NewCustomer};
