//! Lot handlers
//!
//! Endpoints under `/api/lots`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::entities::{LotId, LotRepresentation};
use crate::domain::ports::{CustomerRepository, LotRepository};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// GET /api/lots
pub async fn list_lots<CR, LR>(
    State(state): State<AppState<CR, LR>>,
) -> Result<Json<Vec<LotRepresentation>>, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    let lots = state.lot_service.list().await?;
    Ok(Json(lots))
}

/// GET /api/lots/:id
///
/// An unknown id answers 204 with an empty body rather than 404.
pub async fn get_lot<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    match state.lot_service.get(LotId(id)).await {
        Ok(lot) => Ok(Json(lot).into_response()),
        Err(DomainError::NotFound(_)) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(e) => Err(e.into()),
    }
}

/// POST /api/lots
pub async fn create_lot<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Json(req): Json<LotRepresentation>,
) -> Result<(StatusCode, Json<LotRepresentation>), AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    let created = state.lot_service.create(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/lots/:id
pub async fn update_lot<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<i64>,
    Json(req): Json<LotRepresentation>,
) -> Result<Json<LotRepresentation>, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    let updated = state.lot_service.update(LotId(id), &req).await?;
    Ok(Json(updated))
}

/// DELETE /api/lots/:id
pub async fn delete_lot<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    state.lot_service.delete(LotId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
