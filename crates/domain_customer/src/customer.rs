//! Customer record and request shapes
//!
//! A `Customer` is created from a [`CustomerRegistrationRequest`] without an
//! identity; the storage backend assigns the id on insert. Afterwards it only
//! changes through a [`CustomerUpdateRequest`], whose fields are individually
//! optional so that "not provided" stays distinct from "provided".

use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Storage-assigned identity, `None` until the customer has been inserted
    pub id: Option<CustomerId>,
    /// Display name
    pub name: String,
    /// Contact email, unique across all customers
    pub email: String,
    /// Age in years
    pub age: i32,
}

impl Customer {
    /// Creates a customer that has not been stored yet
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Creates a customer with a known identity
    pub fn with_id(id: CustomerId, name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, email, age)
        }
    }

    /// Returns true once storage has assigned an identity
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Intent to register a new customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl CustomerRegistrationRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

impl From<CustomerRegistrationRequest> for Customer {
    fn from(request: CustomerRegistrationRequest) -> Self {
        Customer::new(request.name, request.email, request.age)
    }
}

/// Partial update of an existing customer
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl CustomerUpdateRequest {
    /// Sets a new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a new age
    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Returns true if no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
