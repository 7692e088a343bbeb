//! Custom Test Assertions
//!
//! Assertion helpers for customer results that print more useful
//! failure messages than plain `assert!(matches!(..))`.

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerError};

/// Asserts that two customers hold the same name, email and age, ignoring ids
pub fn assert_same_details(actual: &Customer, expected: &Customer) {
    assert_eq!(
        (&actual.name, &actual.email, actual.age),
        (&expected.name, &expected.email, expected.age),
        "Customer details differ: actual={:?}, expected={:?}",
        actual,
        expected
    );
}

/// Asserts that a customer carries a storage-assigned id and returns it
pub fn assert_persisted(customer: &Customer) -> CustomerId {
    match customer.id {
        Some(id) => id,
        None => panic!("Expected a persisted customer, got {:?}", customer),
    }
}

/// Asserts that a result is `CustomerError::NotFound` for `id`
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, CustomerError>, id: CustomerId) {
    match result {
        Err(CustomerError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("Expected NotFound({}), got {:?}", id, other),
    }
}

/// Asserts that a result is a `CustomerError::Conflict`
pub fn assert_conflict<T: std::fmt::Debug>(result: Result<T, CustomerError>) {
    assert!(
        matches!(result, Err(CustomerError::Conflict(_))),
        "Expected Conflict, got {:?}",
        result
    );
}

/// Asserts that a result is a `CustomerError::ValidationError`
pub fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, CustomerError>) {
    assert!(
        matches!(result, Err(CustomerError::ValidationError(_))),
        "Expected ValidationError, got {:?}",
        result
    );
}

/// Asserts that ids are strictly increasing in the given order
pub fn assert_ids_increasing(customers: &[Customer]) {
    let ids: Vec<i32> = customers.iter().map(|c| assert_persisted(c).value()).collect();
    assert!(
        ids.windows(2).all(|w| w[0] < w[1]),
        "Expected strictly increasing ids, got {:?}",
        ids
    );
}
