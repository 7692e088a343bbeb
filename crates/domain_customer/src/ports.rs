//! Customer Domain Ports
//!
//! This module defines the storage port for the customer domain, enabling
//! swappable implementations (in-memory, PostgreSQL).
//!
//! # Architecture
//!
//! `CustomerService` only ever talks to `Arc<dyn CustomerPort>`. The backend is
//! chosen once at startup:
//!
//! ```rust,ignore
//! let port: Arc<dyn CustomerPort> = match config.storage {
//!     StorageBackend::Memory => Arc::new(InMemoryCustomerPort::with_sample_data()),
//!     StorageBackend::Postgres => Arc::new(PostgresCustomerAdapter::new(pool)),
//! };
//! let service = CustomerService::new(port);
//! ```
//!
//! # Contract
//!
//! - `insert` assigns the id and returns the stored record.
//! - `update` replaces the record with the same id (inserting it if absent).
//! - `delete_by_id` on an unknown id is a no-op.
//! - Email uniqueness is the service's job. A backend may still reject a
//!   duplicate (e.g. a unique constraint) by returning `PortError::Conflict`.

use async_trait::async_trait;

use core_kernel::{CustomerId, PortError, DomainPort, HealthCheckable};

use crate::customer::Customer;

/// The storage port for customer records
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations.
#[async_trait]
pub trait CustomerPort: DomainPort + HealthCheckable {
    /// Returns every stored customer, in backend order
    async fn list_all(&self) -> Result<Vec<Customer>, PortError>;

    /// Looks up a customer by id
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError>;

    /// Stores a new customer and returns it with its assigned id
    ///
    /// Any id already present on `customer` is ignored.
    async fn insert(&self, customer: Customer) -> Result<Customer, PortError>;

    /// Removes the customer with the given id
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError>;

    /// Replaces the stored customer carrying the same id
    ///
    /// Fails with `PortError::Transformation` if `customer.id` is `None`.
    async fn update(&self, customer: Customer) -> Result<(), PortError>;

    /// Returns true if any customer holds `email`
    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError>;

    /// Returns true if a customer is stored under `id`
    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError>;
}

/// Extracts the id of a customer handed to `update`
pub fn require_id(customer: &Customer) -> Result<CustomerId, PortError> {
    customer.id.ok_or_else(|| PortError::Transformation {
        message: "cannot update a customer without an id".to_string(),
    })
}
