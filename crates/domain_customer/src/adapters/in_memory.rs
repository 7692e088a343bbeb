//! In-memory customer store
//!
//! Keeps customers in insertion order behind a `tokio::sync::RwLock`, with a
//! monotonically increasing id counter. Every port call takes the lock once,
//! so individual calls are atomic; sequences of calls made by the service
//! (check email, then insert) are not.

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{CustomerId, PortError, DomainPort, HealthCheckable, HealthCheckResult};

use crate::customer::Customer;
use crate::ports::{require_id, CustomerPort};

#[derive(Debug, Default)]
struct Store {
    customers: Vec<Customer>,
    last_id: i32,
}

impl Store {
    fn next_id(&mut self) -> Result<CustomerId, PortError> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| PortError::internal("customer id space exhausted"))?;
        Ok(CustomerId::new(self.last_id))
    }

    fn position(&self, id: CustomerId) -> Option<usize> {
        self.customers.iter().position(|c| c.id == Some(id))
    }
}

/// Volatile list-backed implementation of [`CustomerPort`]
#[derive(Debug, Default)]
pub struct InMemoryCustomerPort {
    store: RwLock<Store>,
}

impl InMemoryCustomerPort {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `customers`
    ///
    /// Customers without an id are assigned one; the counter continues after
    /// the highest id seen.
    ///
    /// # Errors
    ///
    /// `PortError::Internal` if an unsaved customer would need an id past `i32::MAX`
    pub fn with_customers(customers: Vec<Customer>) -> Result<Self, PortError> {
        let mut store = Store {
            customers: Vec::with_capacity(customers.len()),
            last_id: customers
                .iter()
                .filter_map(|c| c.id.map(|id| id.value()))
                .max()
                .unwrap_or(0),
        };

        for mut customer in customers {
            if customer.id.is_none() {
                customer.id = Some(store.next_id()?);
            }
            store.customers.push(customer);
        }

        Ok(Self {
            store: RwLock::new(store),
        })
    }

    /// Creates a store holding the two sample customers used for local runs
    pub fn with_sample_data() -> Self {
        Self {
            store: RwLock::new(Store {
                customers: vec![
                    Customer::with_id(CustomerId::new(1), "Alex", "alex@gmail.com", 21),
                    Customer::with_id(CustomerId::new(2), "Jamila", "jamila@gmail.com", 11),
                ],
                last_id: 2,
            }),
        }
    }

    /// Returns the number of stored customers
    pub async fn len(&self) -> usize {
        self.store.read().await.customers.len()
    }
}

impl DomainPort for InMemoryCustomerPort {}

#[async_trait]
impl HealthCheckable for InMemoryCustomerPort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-customer-port", 0)
    }
}

#[async_trait]
impl CustomerPort for InMemoryCustomerPort {
    async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
        Ok(self.store.read().await.customers.clone())
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        let store = self.store.read().await;
        Ok(store.position(id).map(|idx| store.customers[idx].clone()))
    }

    async fn insert(&self, mut customer: Customer) -> Result<Customer, PortError> {
        let mut store = self.store.write().await;
        customer.id = Some(store.next_id()?);
        store.customers.push(customer.clone());
        Ok(customer)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        let mut store = self.store.write().await;
        if let Some(idx) = store.position(id) {
            store.customers.remove(idx);
        }
        Ok(())
    }

    async fn update(&self, customer: Customer) -> Result<(), PortError> {
        let id = require_id(&customer)?;
        let mut store = self.store.write().await;
        if let Some(idx) = store.position(id) {
            store.customers[idx] = customer;
        }
        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError> {
        Ok(self.store.read().await.customers.iter().any(|c| c.email == email))
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError> {
        Ok(self.store.read().await.position(id).is_some())
    }
}
