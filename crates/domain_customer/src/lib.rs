//! Customer Management Domain
//!
//! This crate holds the business rules for registered customers and the
//! storage port those rules are written against.
//!
//! # Layout
//!
//! - **customer**: the `Customer` record and the registration/update requests
//! - **ports**: the `CustomerPort` trait every storage backend implements
//! - **adapters**: the in-memory backend
//! - **service**: `CustomerService`, which enforces email uniqueness,
//!   existence checks, and change detection on updates
//!
//! The PostgreSQL backend lives in `infra_db` and implements the same port.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_customer::{CustomerService, CustomerRegistrationRequest, InMemoryCustomerPort};
//!
//! let service = CustomerService::new(Arc::new(InMemoryCustomerPort::new()));
//!
//! let customer = service
//!     .register_customer(CustomerRegistrationRequest::new("Matay", "matay@code.com", 25))
//!     .await?;
//! let fetched = service.get_customer(customer.id.unwrap()).await?;
//! assert_eq!(fetched.email, "matay@code.com");
//! ```

pub mod customer;
pub mod error;
pub mod ports;
pub mod adapters;
pub mod service;

pub use customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
pub use error::CustomerError;
pub use ports::CustomerPort;
pub use adapters::InMemoryCustomerPort;
pub use service::CustomerService;
