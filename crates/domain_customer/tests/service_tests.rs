//! Tests for CustomerService business rules

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;

use core_kernel::{CustomerId, PortError, DomainPort, HealthCheckable, HealthCheckResult};
use domain_customer::{
    Customer, CustomerError, CustomerPort, CustomerRegistrationRequest, CustomerService,
    CustomerUpdateRequest, InMemoryCustomerPort,
};
use test_utils::{
    age_strategy, assert_ids_increasing, assert_not_found, assert_persisted,
    assert_same_details, assert_validation_error, distinct_registrations_strategy,
    name_strategy, unsaved_customer_strategy, update_request_strategy, CustomerFixtures,
    IdFixtures, TestCustomerBuilder,
};

// ============================================================================
// Test doubles
// ============================================================================

/// Wraps the in-memory store and counts the writes the service performs
#[derive(Default)]
struct RecordingPort {
    inner: InMemoryCustomerPort,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl RecordingPort {
    fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            inner: InMemoryCustomerPort::with_customers(customers).unwrap(),
            ..Default::default()
        }
    }

    fn writes(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }
}

impl DomainPort for RecordingPort {}

#[async_trait]
impl HealthCheckable for RecordingPort {
    async fn health_check(&self) -> HealthCheckResult {
        self.inner.health_check().await
    }
}

#[async_trait]
impl CustomerPort for RecordingPort {
    async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
        self.inner.list_all().await
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        self.inner.get_by_id(id).await
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, PortError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(customer).await
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }

    async fn update(&self, customer: Customer) -> Result<(), PortError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(customer).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, PortError> {
        self.inner.exists_by_email(email).await
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, PortError> {
        self.inner.exists_by_id(id).await
    }
}

/// A backend whose every call fails, as if the database were unreachable
struct UnavailablePort;

impl DomainPort for UnavailablePort {}

#[async_trait]
impl HealthCheckable for UnavailablePort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::unhealthy("unavailable", 0, "connection refused")
    }
}

#[async_trait]
impl CustomerPort for UnavailablePort {
    async fn list_all(&self) -> Result<Vec<Customer>, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn get_by_id(&self, _id: CustomerId) -> Result<Option<Customer>, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn insert(&self, _customer: Customer) -> Result<Customer, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn delete_by_id(&self, _id: CustomerId) -> Result<(), PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn update(&self, _customer: Customer) -> Result<(), PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn exists_by_email(&self, _email: &str) -> Result<bool, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn exists_by_id(&self, _id: CustomerId) -> Result<bool, PortError> {
        Err(PortError::connection("connection refused"))
    }
}

fn matay() -> Customer {
    CustomerFixtures::matay()
}

fn service_with(customers: Vec<Customer>) -> (CustomerService, Arc<RecordingPort>) {
    let port = Arc::new(RecordingPort::with_customers(customers));
    (CustomerService::new(port.clone()), port)
}

// ============================================================================
// Lookup
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_port_contents_in_order() {
        let (service, _) = service_with(vec![matay(), CustomerFixtures::alex()]);

        let customers = service.list_customers().await.unwrap();

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Matay");
        assert_eq!(customers[1].name, "Alex");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (service, _) = service_with(vec![]);
        assert!(service.list_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_customer_by_id() {
        let (service, _) = service_with(vec![matay()]);

        let actual = service.get_customer(CustomerId::new(1)).await.unwrap();

        assert_eq!(actual, matay());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let (service, _) = service_with(vec![]);

        let error = service.get_customer(CustomerId::new(1)).await.unwrap_err();

        assert!(matches!(error, CustomerError::NotFound(id) if id == CustomerId::new(1)));
        assert_eq!(error.to_string(), "Customer with id [1] not found");
    }

    #[tokio::test]
    async fn test_get_id_absent_from_populated_store() {
        let (service, _) = service_with(vec![matay(), CustomerFixtures::alex()]);
        let missing = IdFixtures::unknown_customer_id();

        assert_not_found(service.get_customer(missing).await, missing);
    }
}

// ============================================================================
// Registration
// ============================================================================

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_get_returns_same_values() {
        let (service, port) = service_with(vec![]);

        let registered = service
            .register_customer(CustomerFixtures::matay_registration())
            .await
            .unwrap();

        let id = assert_persisted(&registered);
        let fetched = service.get_customer(id).await.unwrap();

        assert_same_details(&fetched, &matay());
        assert_eq!(port.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict() {
        let (service, port) = service_with(vec![matay()]);

        let error = service
            .register_customer(CustomerRegistrationRequest::new("Other", "matay@code.com", 40))
            .await
            .unwrap_err();

        assert!(matches!(error, CustomerError::Conflict(_)));
        assert_eq!(
            error.to_string(),
            "Email already in use. Please choose a different email address."
        );
        assert_eq!(port.writes(), 0);
        assert_eq!(service.list_customers().await.unwrap(), vec![matay()]);
    }

    #[tokio::test]
    async fn test_register_assigns_distinct_ids() {
        let (service, _) = service_with(vec![]);

        let a = service
            .register_customer(CustomerRegistrationRequest::new("A", "a@code.com", 20))
            .await
            .unwrap();
        let b = service
            .register_customer(CustomerRegistrationRequest::new("B", "b@code.com", 30))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_register_random_customers_in_sequence() {
        let (service, _) = service_with(vec![]);
        let mut registered = Vec::new();

        for request in CustomerFixtures::random_registrations(5) {
            registered.push(service.register_customer(request).await.unwrap());
        }

        assert_ids_increasing(&registered);
        assert_eq!(service.list_customers().await.unwrap(), registered);
    }

    #[tokio::test]
    async fn test_register_built_request() {
        let (service, _) = service_with(vec![matay()]);
        let request = TestCustomerBuilder::new()
            .with_name("Jamila")
            .with_email("jamila@gmail.com")
            .with_age(11)
            .build_registration();

        let registered = service.register_customer(request).await.unwrap();

        assert_eq!(registered.id, Some(CustomerId::new(2)));
        assert_same_details(&registered, &CustomerFixtures::jamila());
    }
}

// ============================================================================
// Deletion
// ============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_existing_customer() {
        let (service, port) = service_with(vec![matay()]);

        service.delete_customer(CustomerId::new(1)).await.unwrap();

        assert_eq!(port.deletes.load(Ordering::SeqCst), 1);
        let error = service.get_customer(CustomerId::new(1)).await.unwrap_err();
        assert!(matches!(error, CustomerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found_without_deleting() {
        let (service, port) = service_with(vec![matay()]);

        let error = service.delete_customer(CustomerId::new(2)).await.unwrap_err();

        assert_eq!(error.to_string(), "Customer with id [2] not found");
        assert_eq!(port.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_fails_second_time() {
        let (service, _) = service_with(vec![matay()]);

        assert!(service.delete_customer(CustomerId::new(1)).await.is_ok());
        let second = service.delete_customer(CustomerId::new(1)).await;

        assert!(matches!(second, Err(CustomerError::NotFound(_))));
    }
}

// ============================================================================
// Update
// ============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_all_properties() {
        let (service, port) = service_with(vec![matay()]);

        let request = TestCustomerBuilder::new()
            .with_name("Alex")
            .with_email("alex@gmail.com")
            .with_age(30)
            .build_full_update();

        let updated = service
            .update_customer(CustomerId::new(1), request)
            .await
            .unwrap();

        let expected = TestCustomerBuilder::new()
            .with_id(1)
            .with_name("Alex")
            .with_email("alex@gmail.com")
            .with_age(30)
            .build();
        assert_eq!(updated, expected);
        assert_eq!(service.get_customer(CustomerId::new(1)).await.unwrap(), updated);
        assert_eq!(port.updates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_only_name() {
        let (service, _) = service_with(vec![matay()]);

        service
            .update_customer(CustomerId::new(1), CustomerUpdateRequest::default().name("X"))
            .await
            .unwrap();

        let stored = service.get_customer(CustomerId::new(1)).await.unwrap();
        assert_eq!(stored, Customer::with_id(CustomerId::new(1), "X", "matay@code.com", 25));
    }

    #[tokio::test]
    async fn test_update_only_email() {
        let (service, _) = service_with(vec![matay()]);

        service
            .update_customer(CustomerId::new(1), CustomerUpdateRequest::default().email("new@code.com"))
            .await
            .unwrap();

        let stored = service.get_customer(CustomerId::new(1)).await.unwrap();
        assert_eq!(stored.email, "new@code.com");
        assert_eq!(stored.name, "Matay");
        assert_eq!(stored.age, 25);
    }

    #[tokio::test]
    async fn test_update_only_age() {
        let (service, _) = service_with(vec![matay()]);

        service
            .update_customer(CustomerId::new(1), CustomerUpdateRequest::default().age(26))
            .await
            .unwrap();

        let stored = service.get_customer(CustomerId::new(1)).await.unwrap();
        assert_eq!(stored.age, 26);
        assert_eq!(stored.email, "matay@code.com");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (service, port) = service_with(vec![]);

        let error = service
            .update_customer(CustomerId::new(7), CustomerUpdateRequest::default().name("X"))
            .await
            .unwrap_err();

        assert!(matches!(error, CustomerError::NotFound(id) if id == CustomerId::new(7)));
        assert_eq!(port.writes(), 0);
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_conflict_and_changes_nothing() {
        let alex = CustomerFixtures::alex();
        let (service, port) = service_with(vec![matay(), alex.clone()]);

        let error = service
            .update_customer(
                CustomerId::new(1),
                CustomerUpdateRequest::default().name("Renamed").email("alex@gmail.com"),
            )
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Email already in use. Please choose a different email address."
        );
        assert_eq!(port.writes(), 0);
        assert_eq!(service.list_customers().await.unwrap(), vec![matay(), alex]);
    }

    #[tokio::test]
    async fn test_update_with_same_values_is_validation_error() {
        let (service, port) = service_with(vec![matay()]);

        let request = TestCustomerBuilder::new().build_full_update();

        let error = service
            .update_customer(CustomerId::new(1), request)
            .await
            .unwrap_err();

        assert!(matches!(error, CustomerError::ValidationError(_)));
        assert_eq!(error.to_string(), "No data changes found");
        assert_eq!(port.writes(), 0);
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_validation_error() {
        let (service, port) = service_with(vec![matay()]);

        assert_validation_error(
            service
                .update_customer(CustomerId::new(1), CustomerUpdateRequest::default())
                .await,
        );
        assert_eq!(port.writes(), 0);
    }

    #[tokio::test]
    async fn test_same_email_is_not_checked_for_uniqueness() {
        // the customer's own email would otherwise collide with itself
        let (service, _) = service_with(vec![matay()]);

        let updated = service
            .update_customer(
                CustomerId::new(1),
                CustomerUpdateRequest::default().email("matay@code.com").age(26),
            )
            .await
            .unwrap();

        assert_eq!(updated.age, 26);
    }
}

// ============================================================================
// Storage failures
// ============================================================================

mod storage_failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_port_failures_propagate_as_storage_errors() {
        let service = CustomerService::new(Arc::new(UnavailablePort));

        assert!(matches!(service.list_customers().await, Err(CustomerError::Storage(_))));
        assert!(matches!(
            service.get_customer(CustomerId::new(1)).await,
            Err(CustomerError::Storage(_))
        ));
        assert!(matches!(
            service
                .register_customer(CustomerRegistrationRequest::new("Matay", "matay@code.com", 25))
                .await,
            Err(CustomerError::Storage(_))
        ));
        assert!(matches!(
            service.delete_customer(CustomerId::new(1)).await,
            Err(CustomerError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_health_check_reports_port_status() {
        let service = CustomerService::new(Arc::new(UnavailablePort));
        assert!(!service.health_check().await.is_operational());

        let (healthy, _) = service_with(vec![]);
        assert!(healthy.health_check().await.is_operational());
    }
}

// ============================================================================
// Properties
// ============================================================================

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
}

proptest! {
    #[test]
    fn prop_register_with_stored_email_never_writes(
        name in name_strategy(),
        age in age_strategy(),
    ) {
        runtime().block_on(async {
            let (service, port) = service_with(vec![matay()]);

            let result = service
                .register_customer(CustomerRegistrationRequest::new(name, "matay@code.com", age))
                .await;

            assert!(matches!(result, Err(CustomerError::Conflict(_))));
            assert_eq!(port.writes(), 0);
        });
    }

    #[test]
    fn prop_unknown_ids_are_not_found(raw in 2i32..10_000) {
        runtime().block_on(async {
            let (service, port) = service_with(vec![matay()]);
            let id = CustomerId::new(raw);

            assert!(matches!(service.get_customer(id).await, Err(CustomerError::NotFound(_))));
            assert!(matches!(service.delete_customer(id).await, Err(CustomerError::NotFound(_))));
            assert!(matches!(
                service.update_customer(id, CustomerUpdateRequest::default().name("X")).await,
                Err(CustomerError::NotFound(_))
            ));
            assert_eq!(port.writes(), 0);
        });
    }

    #[test]
    fn prop_update_changes_only_supplied_fields(request in update_request_strategy()) {
        runtime().block_on(async {
            let original = matay();
            let (service, port) = service_with(vec![original.clone()]);

            let expected = Customer {
                id: original.id,
                name: request.name.clone().unwrap_or_else(|| original.name.clone()),
                email: request.email.clone().unwrap_or_else(|| original.email.clone()),
                age: request.age.unwrap_or(original.age),
            };
            let anything_changed = expected != original;

            let result = service.update_customer(CustomerId::new(1), request).await;
            let stored = service.get_customer(CustomerId::new(1)).await.unwrap();

            if anything_changed {
                assert_eq!(result.unwrap(), expected);
                assert_eq!(stored, expected);
            } else {
                assert_validation_error(result);
                assert_eq!(stored, original);
            }
            assert_eq!(port.writes(), usize::from(anything_changed));
        });
    }

    #[test]
    fn prop_distinct_registrations_all_succeed(requests in distinct_registrations_strategy(8)) {
        runtime().block_on(async {
            let (service, port) = service_with(vec![]);
            let mut registered = Vec::new();

            for request in requests.clone() {
                registered.push(service.register_customer(request).await.unwrap());
            }

            assert_ids_increasing(&registered);
            assert_eq!(port.inserts.load(Ordering::SeqCst), requests.len());
        });
    }

    #[test]
    fn prop_in_memory_insert_assigns_fresh_ids(
        customers in proptest::collection::vec(unsaved_customer_strategy(), 0..8),
    ) {
        runtime().block_on(async {
            let port = InMemoryCustomerPort::with_customers(vec![matay()]).unwrap();
            let mut stored = vec![matay()];

            for customer in customers {
                stored.push(port.insert(customer).await.unwrap());
            }

            assert_ids_increasing(&stored);
            assert_eq!(port.list_all().await.unwrap(), stored);
        });
    }
}
