//! Pre-built Test Fixtures
//!
//! Ready-to-use customers and requests. The fixed fixtures are predictable;
//! the `random_*` ones use `fake` for tests that only need *some* valid data.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerRegistrationRequest};

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// The canonical stored customer used across service tests
    pub fn matay() -> Customer {
        Customer::with_id(CustomerId::new(1), "Matay", "matay@code.com", 25)
    }

    /// A second stored customer
    pub fn alex() -> Customer {
        Customer::with_id(CustomerId::new(2), "Alex", "alex@gmail.com", 21)
    }

    /// A third stored customer
    pub fn jamila() -> Customer {
        Customer::with_id(CustomerId::new(3), "Jamila", "jamila@gmail.com", 11)
    }

    /// Registration request matching [`CustomerFixtures::matay`]
    pub fn matay_registration() -> CustomerRegistrationRequest {
        CustomerRegistrationRequest::new("Matay", "matay@code.com", 25)
    }

    /// A registration request with a random name, a matching email and an age in 16..70
    pub fn random_registration() -> CustomerRegistrationRequest {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let suffix: u32 = (0..1_000_000).fake();
        let email = format!(
            "{}.{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            suffix
        );
        CustomerRegistrationRequest::new(format!("{} {}", first, last), email, (16..70).fake::<i32>())
    }

    /// `count` random registration requests with distinct emails
    pub fn random_registrations(count: usize) -> Vec<CustomerRegistrationRequest> {
        let mut requests: Vec<CustomerRegistrationRequest> = Vec::with_capacity(count);
        while requests.len() < count {
            let candidate = Self::random_registration();
            if requests.iter().all(|r| r.email != candidate.email) {
                requests.push(candidate);
            }
        }
        requests
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// An id that no fixture uses
    pub fn unknown_customer_id() -> CustomerId {
        CustomerId::new(9_999)
    }
}
