//! Demo data seeding
//!
//! Registers one random customer at startup when `API_SEED_DEMO_DATA=true`.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use tracing::{info, warn};

use domain_customer::{Customer, CustomerError, CustomerRegistrationRequest, CustomerService};

const DEMO_EMAIL_DOMAIN: &str = "mataycode.com";

/// Builds a registration with a random name, `first.last@mataycode.com` and an age in 16..70
pub fn demo_registration() -> CustomerRegistrationRequest {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    registration_for(&first, &last, (16..70).fake::<i32>())
}

fn registration_for(first: &str, last: &str, age: i32) -> CustomerRegistrationRequest {
    let email = format!("{}.{}@{}", first, last, DEMO_EMAIL_DOMAIN).to_lowercase();
    CustomerRegistrationRequest::new(format!("{} {}", first, last), email, age)
}

/// Registers a demo customer
///
/// An email collision is not an error: the customer is skipped and
/// `Ok(None)` returned.
pub async fn seed_demo_customer(
    service: &CustomerService,
) -> Result<Option<Customer>, CustomerError> {
    match service.register_customer(demo_registration()).await {
        Ok(customer) => {
            info!(customer_id = ?customer.id, email = %customer.email, "Seeded demo customer");
            Ok(Some(customer))
        }
        Err(CustomerError::Conflict(message)) => {
            warn!(%message, "Demo customer already present, skipping");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
