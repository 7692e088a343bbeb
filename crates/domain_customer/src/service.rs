//! Customer domain service
//!
//! `CustomerService` is the only place customer business rules live. It sits
//! between the HTTP layer and the storage port and is independent of which
//! backend the port is bound to.
//!
//! # Rules
//!
//! - An email may be held by at most one customer. The check runs before
//!   registration and before any update that changes the email.
//! - Lookups, deletions and updates of an unknown id fail with `NotFound`.
//! - An update must change at least one field. All changes are staged on a
//!   copy of the current record and written once, after every check passed.
//!
//! The email check and the subsequent write are separate port calls, so two
//! concurrent registrations with the same email can both pass the check.
//! The PostgreSQL schema closes that gap with a unique constraint; the
//! resulting `PortError::Conflict` surfaces as the same `Conflict` error.

use std::sync::Arc;
use tracing::{debug, info, warn};

use core_kernel::{CustomerId, HealthCheckResult};

use crate::customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
use crate::error::CustomerError;
use crate::ports::CustomerPort;

/// Service enforcing customer business rules over a [`CustomerPort`]
#[derive(Clone)]
pub struct CustomerService {
    port: Arc<dyn CustomerPort>,
}

impl CustomerService {
    /// Creates a service bound to the given storage port
    pub fn new(port: Arc<dyn CustomerPort>) -> Self {
        Self { port }
    }

    /// Returns every customer in the order the port yields them
    pub async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.port.list_all().await?)
    }

    /// Returns the customer stored under `id`
    ///
    /// # Errors
    ///
    /// `CustomerError::NotFound` if no such customer exists
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.port
            .get_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Registers a new customer
    ///
    /// # Returns
    ///
    /// The stored customer, carrying the id assigned by the port
    ///
    /// # Errors
    ///
    /// `CustomerError::Conflict` if the email is already in use; nothing is written
    pub async fn register_customer(
        &self,
        request: CustomerRegistrationRequest,
    ) -> Result<Customer, CustomerError> {
        self.ensure_email_available(&request.email).await?;

        let customer = self.port.insert(Customer::from(request)).await?;

        info!(customer_id = ?customer.id, "Customer registered");
        Ok(customer)
    }

    /// Deletes the customer stored under `id`
    ///
    /// # Errors
    ///
    /// `CustomerError::NotFound` if no such customer exists; nothing is deleted
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.port.exists_by_id(id).await? {
            return Err(CustomerError::NotFound(id));
        }

        self.port.delete_by_id(id).await?;

        info!(customer_id = %id, "Customer deleted");
        Ok(())
    }

    /// Applies a partial update to the customer stored under `id`
    ///
    /// Only fields that are supplied and differ from the current value count
    /// as changes.
    ///
    /// # Returns
    ///
    /// The customer as written to storage
    ///
    /// # Errors
    ///
    /// - `CustomerError::NotFound` if no such customer exists
    /// - `CustomerError::Conflict` if the new email belongs to another customer
    /// - `CustomerError::ValidationError` if nothing would change
    pub async fn update_customer(
        &self,
        id: CustomerId,
        request: CustomerUpdateRequest,
    ) -> Result<Customer, CustomerError> {
        let mut customer = self.get_customer(id).await?;
        let mut changed = false;

        if let Some(name) = request.name {
            if name != customer.name {
                customer.name = name;
                changed = true;
            }
        }

        if let Some(email) = request.email {
            if email != customer.email {
                self.ensure_email_available(&email).await?;
                customer.email = email;
                changed = true;
            }
        }

        if let Some(age) = request.age {
            if age != customer.age {
                customer.age = age;
                changed = true;
            }
        }

        if !changed {
            debug!(customer_id = %id, "Update request carried no changes");
            return Err(CustomerError::no_changes());
        }

        self.port.update(customer.clone()).await?;

        info!(customer_id = %id, "Customer updated");
        Ok(customer)
    }

    /// Reports the health of the underlying storage port
    pub async fn health_check(&self) -> HealthCheckResult {
        self.port.health_check().await
    }

    async fn ensure_email_available(&self, email: &str) -> Result<(), CustomerError> {
        if self.port.exists_by_email(email).await? {
            warn!("Rejected email already held by another customer");
            return Err(CustomerError::email_taken());
        }
        Ok(())
    }
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService").finish_non_exhaustive()
    }
}
