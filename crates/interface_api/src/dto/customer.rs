//! Customer DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
}

impl From<RegisterCustomerRequest> for CustomerRegistrationRequest {
    fn from(dto: RegisterCustomerRequest) -> Self {
        CustomerRegistrationRequest::new(dto.name, dto.email, dto.age)
    }
}

/// Absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<i32>,
}

impl From<UpdateCustomerRequest> for CustomerUpdateRequest {
    fn from(dto: UpdateCustomerRequest) -> Self {
        CustomerUpdateRequest {
            name: dto.name,
            email: dto.email,
            age: dto.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerResponse {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(|id| id.value()),
            name: customer.name,
            email: customer.email,
            age: customer.age,
        }
    }
}
