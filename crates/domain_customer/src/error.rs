//! Customer domain errors
//!
//! Three caller-correctable kinds (not found, conflict, validation) plus an
//! opaque storage kind for infrastructure failures reported by the port.

use thiserror::Error;

use core_kernel::{CustomerId, PortError};

/// Message used whenever an email is already held by another customer
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already in use. Please choose a different email address.";

/// Message used when an update request would not change anything
pub const NO_CHANGES_MESSAGE: &str = "No data changes found";

/// Errors that can occur in the customer domain
#[derive(Debug, Error)]
pub enum CustomerError {
    /// No customer is stored under the given id
    #[error("Customer with id [{0}] not found")]
    NotFound(CustomerId),

    /// The requested email already belongs to a customer
    #[error("{0}")]
    Conflict(String),

    /// The request was well-formed but semantically empty
    #[error("{0}")]
    ValidationError(String),

    /// The storage backend failed
    #[error("Storage unavailable: {0}")]
    Storage(#[source] PortError),
}

impl CustomerError {
    /// Creates a NotFound error for the given id
    pub fn not_found(id: CustomerId) -> Self {
        CustomerError::NotFound(id)
    }

    /// Creates the duplicate-email Conflict error
    pub fn email_taken() -> Self {
        CustomerError::Conflict(EMAIL_TAKEN_MESSAGE.to_string())
    }

    /// Creates the empty-update ValidationError
    pub fn no_changes() -> Self {
        CustomerError::ValidationError(NO_CHANGES_MESSAGE.to_string())
    }

    /// Returns true for errors the caller can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CustomerError::Storage(_))
    }
}

/// A storage-level conflict can only come from the email unique constraint,
/// so it surfaces exactly like the service's own uniqueness check.
impl From<PortError> for CustomerError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Conflict { .. } => CustomerError::email_taken(),
            other => CustomerError::Storage(other),
        }
    }
}
