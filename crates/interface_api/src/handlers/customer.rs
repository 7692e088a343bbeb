//! Customer handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::CustomerId;

use crate::dto::customer::*;
use crate::{error::ApiError, AppState};

/// Lists all customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.service.list_customers().await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Gets a customer by id
pub async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(id) = id?;
    let customer = state.service.get_customer(CustomerId::new(id)).await?;
    Ok(Json(customer.into()))
}

/// Registers a new customer
pub async fn register_customer(
    State(state): State<AppState>,
    request: Result<Json<RegisterCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let Json(request) = request?;
    request.validate()?;
    let customer = state.service.register_customer(request.into()).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Applies a partial update to a customer
pub async fn update_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(id) = id?;
    let Json(request) = request?;
    request.validate()?;
    let customer = state
        .service
        .update_customer(CustomerId::new(id), request.into())
        .await?;
    Ok(Json(customer.into()))
}

/// Deletes a customer
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.service.delete_customer(CustomerId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
