//! HTTP API Layer
//!
//! This crate provides the REST API for the customer backend using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Customer CRUD, health and ping endpoints
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Validated request bodies and response shapes
//! - **Error Handling**: Domain errors mapped to status codes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod seed;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_customer::CustomerService;

use crate::config::ApiConfig;
use crate::middleware::{audit_middleware, SequentialRequestId};
use crate::handlers::{customer, health, ping};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Customer service wired to the chosen storage port
/// * `config` - API configuration
pub fn create_router(service: CustomerService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/ping", get(ping::ping));

    let customer_routes = Router::new()
        .route(
            "/",
            get(customer::list_customers).post(customer::register_customer),
        )
        .route(
            "/:id",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        );

    let api_routes = Router::new()
        .nest("/customers", customer_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(SequentialRequestId::default()))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
