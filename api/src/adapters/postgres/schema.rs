//! Schema bootstrap
//!
//! Applies the idempotent DDL in `migrations/` at startup.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use super::store_error;
use crate::error::StoreError;

const CUSTOMERS_AND_LOTS: &str = include_str!("../../../migrations/0001_customers_and_lots.sql");

/// Create the `customer` and `lot` tables if they do not exist yet
pub async fn apply_schema(db: &DatabaseConnection) -> Result<(), StoreError> {
    db.execute_unprepared(CUSTOMERS_AND_LOTS)
        .await
        .map_err(store_error)?;

    tracing::info!("Database schema is up to date");
    Ok(())
}
