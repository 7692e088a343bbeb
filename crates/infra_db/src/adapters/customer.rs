//! PostgreSQL Customer Adapter
//!
//! This module provides the relational backend for the customer domain,
//! implementing `CustomerPort` on top of `CustomerRepository`.
//!
//! # Error Handling
//!
//! Database errors are translated to `PortError` variants:
//! - duplicate `customer_email_unique` -> `PortError::Conflict`
//! - connection and pool failures -> `PortError::Connection` / `PortError::Timeout`
//! - other errors -> `PortError::Internal`

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, PortError, DomainPort, HealthCheckable, HealthCheckResult};
use domain_customer::ports::require_id;
use domain_customer::{Customer, CustomerPort};

use crate::repositories::customer::{CustomerRepository, CustomerRow, NewCustomer};
use crate::DatabasePool;

const ADAPTER_ID: &str = "postgres-customer-adapter";

/// PostgreSQL-backed implementation of the CustomerPort trait
#[derive(Debug, Clone)]
pub struct PostgresCustomerAdapter {
    repository: CustomerRepository,
}

impl PostgresCustomerAdapter {
    /// Creates a new PostgreSQL customer adapter
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }
}

impl DomainPort for PostgresCustomerAdapter {}

#[async_trait]
impl HealthCheckable for PostgresCustomerAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.repository.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl CustomerPort for PostgresCustomerAdapter {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
        let rows = self.repository.find_all().await?;
        debug!(count = rows.len(), "Fetched customers");
        Ok(rows.into_iter().map(row_to_customer).collect())
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        let row = self.repository.find_by_id(id.value()).await?;
        Ok(row.map(row_to_customer))
    }

    #[instrument(skip(self, customer))]
    async fn insert(&self, customer: Customer) -> Result<Customer, PortError> {
        let row = self
            .repository
            .insert(NewCustomer {
                name: customer.name,
                email: customer.email,
                age: customer.age,
            })
            .await?;

        debug!(customer_id = row.id, "Inserted customer");
        Ok(row_to_customer(row))
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        let removed = self.repository.delete_by_id(id.value()).await?;
        debug!(removed, "Deleted customer");
        Ok(())
    }

    #[instrument(skip(self, customer), fields(customer_id = ?customer.id))]
    async fn update(&self, customer: Customer) -> Result<(), PortError> {
        let row = customer_to_row(&customer)?;
        let updated = self.repository.update(&row).await?;
        debug!(updated, "Updated customer");
        Ok(())
    }

    #[instrument(skip(self, email))]
    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError> {
        Ok(self.repository.exists_by_email(email).await?)
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError> {
        Ok(self.repository.exists_by_id(id.value()).await?)
    }
}

/// Converts a database row to a domain Customer
pub fn row_to_customer(row: CustomerRow) -> Customer {
    Customer::with_id(CustomerId::new(row.id), row.name, row.email, row.age)
}

/// Converts a stored domain Customer to a database row
pub fn customer_to_row(customer: &Customer) -> Result<CustomerRow, PortError> {
    let id = require_id(customer)?;
    Ok(CustomerRow {
        id: id.value(),
        name: customer.name.clone(),
        email: customer.email.clone(),
        age: customer.age,
    })
}
