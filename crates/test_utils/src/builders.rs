//! Test Data Builders
//!
//! Builder for customer test data with sensible defaults, so tests only
//! spell out the fields they care about.

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};

/// Builder for constructing test customers
pub struct TestCustomerBuilder {
    id: Option<CustomerId>,
    name: String,
    email: String,
    age: i32,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            name: "Matay".to_string(),
            email: "matay@code.com".to_string(),
            age: 25,
        }
    }

    /// Sets the id
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(CustomerId::new(id));
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the age
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Builds the customer
    pub fn build(self) -> Customer {
        Customer {
            id: self.id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }

    /// Builds a registration request from the same values (the id is dropped)
    pub fn build_registration(self) -> CustomerRegistrationRequest {
        CustomerRegistrationRequest::new(self.name, self.email, self.age)
    }

    /// Builds an update request setting every field to the built values
    pub fn build_full_update(self) -> CustomerUpdateRequest {
        CustomerUpdateRequest {
            name: Some(self.name),
            email: Some(self.email),
            age: Some(self.age),
        }
    }
}
