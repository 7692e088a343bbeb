//! Property-Based Test Generators
//!
//! Proptest strategies for customer data that satisfies the storage
//! constraints (non-empty names, well-formed emails).

use proptest::prelude::*;

use domain_customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};

/// Strategy for capitalized names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}( [A-Z][a-z]{1,11})?"
}

/// Strategy for lowercase emails
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}(\\.[a-z]{1,10})?", prop_oneof![
        Just("gmail.com"),
        Just("code.com"),
        Just("example.com"),
    ])
        .prop_map(|(local, domain)| format!("{}@{}", local, domain))
}

/// Strategy for ages
pub fn age_strategy() -> impl Strategy<Value = i32> {
    0i32..120
}

/// Strategy for registration requests
pub fn registration_strategy() -> impl Strategy<Value = CustomerRegistrationRequest> {
    (name_strategy(), email_strategy(), age_strategy())
        .prop_map(|(name, email, age)| CustomerRegistrationRequest::new(name, email, age))
}

/// Strategy for customers without an id
pub fn unsaved_customer_strategy() -> impl Strategy<Value = Customer> {
    registration_strategy().prop_map(Customer::from)
}

/// Strategy for update requests where each field may be absent
pub fn update_request_strategy() -> impl Strategy<Value = CustomerUpdateRequest> {
    (
        proptest::option::of(name_strategy()),
        proptest::option::of(email_strategy()),
        proptest::option::of(age_strategy()),
    )
        .prop_map(|(name, email, age)| CustomerUpdateRequest { name, email, age })
}

/// Strategy for a list of registrations with pairwise distinct emails
pub fn distinct_registrations_strategy(
    max_len: usize,
) -> impl Strategy<Value = Vec<CustomerRegistrationRequest>> {
    proptest::collection::vec(registration_strategy(), 0..=max_len).prop_map(|requests| {
        let mut seen = std::collections::HashSet::new();
        requests
            .into_iter()
            .filter(|r| seen.insert(r.email.clone()))
            .collect()
    })
}
