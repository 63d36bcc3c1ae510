//! Lot service
//!
//! CRUD use cases for lots. Whether the owning customer exists is decided
//! by the store at write time, never by validation.

use std::sync::Arc;

use crate::domain::entities::{LotId, LotRepresentation};
use crate::domain::ports::LotRepository;
use crate::error::DomainError;

/// Service for managing lots
pub struct LotService<LR>
where
    LR: LotRepository,
{
    lots: Arc<LR>,
}

impl<LR> LotService<LR>
where
    LR: LotRepository,
{
    pub fn new(lots: Arc<LR>) -> Self {
        Self { lots }
    }

    /// List every lot
    pub async fn list(&self) -> Result<Vec<LotRepresentation>, DomainError> {
        let lots = self.lots.find_all().await?;
        Ok(lots.into_iter().map(Into::into).collect())
    }

    /// Get a lot by ID
    pub async fn get(&self, id: LotId) -> Result<LotRepresentation, DomainError> {
        self.lots
            .find_by_id(&id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Create a lot; the store assigns its id
    pub async fn create(
        &self,
        representation: &LotRepresentation,
    ) -> Result<LotRepresentation, DomainError> {
        let new_lot = representation.validate_new()?;

        let created = self
            .lots
            .create(&new_lot)
            .await
            .map_err(|e| conflict_logged(e.into(), &new_lot.customer_code))?;

        tracing::info!(lot_id = %created.id, customer_code = %created.customer_code, "Lot created");
        Ok(created.into())
    }

    /// Replace every field of lot `id` except the id itself
    pub async fn update(
        &self,
        id: LotId,
        representation: &LotRepresentation,
    ) -> Result<LotRepresentation, DomainError> {
        let new_lot = representation.validate_replacement(id)?;

        if self.lots.find_by_id(&id).await?.is_none() {
            return Err(not_found(id));
        }

        let updated = self
            .lots
            .update(&id, &new_lot)
            .await
            .map_err(|e| conflict_logged(e.into(), &new_lot.customer_code))?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(lot_id = %id, "Lot updated");
        Ok(updated.into())
    }

    /// Delete a lot; deleting an unknown id is a no-op
    pub async fn delete(&self, id: LotId) -> Result<(), DomainError> {
        self.lots.delete(&id).await?;

        tracing::info!(lot_id = %id, "Lot deleted");
        Ok(())
    }
}

fn not_found(id: LotId) -> DomainError {
    DomainError::NotFound(format!("Lot {} not found", id))
}

fn conflict_logged(err: DomainError, customer_code: &str) -> DomainError {
    if let DomainError::Conflict { kind, message } = &err {
        tracing::warn!(
            customer_code = %customer_code,
            %kind,
            error = %message,
            "Lot write rejected by store"
        );
    }
    err
}
