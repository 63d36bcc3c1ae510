//! Customer handlers
//!
//! Endpoints under `/api/customers`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::entities::CustomerRepresentation;
use crate::domain::ports::{CustomerRepository, LotRepository};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// GET /api/customers
pub async fn list_customers<CR, LR>(
    State(state): State<AppState<CR, LR>>,
) -> Result<Json<Vec<CustomerRepresentation>>, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    let customers = state.customer_service.list().await?;
    Ok(Json(customers))
}

/// GET /api/customers/:code
///
/// An unknown code answers 204 with an empty body rather than 404.
pub async fn get_customer<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(code): Path<String>,
) -> Result<Response, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    match state.customer_service.get(&code).await {
        Ok(customer) => Ok(Json(customer).into_response()),
        Err(DomainError::NotFound(_)) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(e) => Err(e.into()),
    }
}

/// POST /api/customers
pub async fn create_customer<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Json(req): Json<CustomerRepresentation>,
) -> Result<(StatusCode, Json<CustomerRepresentation>), AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    let created = state.customer_service.create(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/customers/:code
///
/// Full replacement. The body may carry a different code to rename the customer.
pub async fn update_customer<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(code): Path<String>,
    Json(req): Json<CustomerRepresentation>,
) -> Result<Json<CustomerRepresentation>, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    let updated = state.customer_service.update(&code, &req).await?;
    Ok(Json(updated))
}

/// DELETE /api/customers/:code
pub async fn delete_customer<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    state.customer_service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
