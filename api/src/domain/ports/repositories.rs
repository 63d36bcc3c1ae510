//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Writes never raise on constraint violations: they come back as
//! `StoreError::Constraint` with the violated constraint class, and every
//! other failure as `StoreError::Unexpected`.

use async_trait::async_trait;

use crate::domain::entities::{Customer, Lot, LotId, NewLot};
use crate::error::StoreError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List every customer, ordered by code
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError>;

    /// Find a customer by code
    async fn find_by_code(&self, code: &str) -> Result<Option<Customer>, StoreError>;

    /// Insert a new customer
    async fn create(&self, customer: &Customer) -> Result<Customer, StoreError>;

    /// Replace every column of the customer stored under `code`.
    ///
    /// Returns `None` when no row matched. The replacement may carry a new
    /// code, in which case the row is re-keyed.
    async fn update(&self, code: &str, customer: &Customer)
        -> Result<Option<Customer>, StoreError>;

    /// Delete a customer by code; a missing code is not an error
    async fn delete(&self, code: &str) -> Result<(), StoreError>;
}

/// Repository for Lot entities
#[async_trait]
pub trait LotRepository: Send + Sync {
    /// List every lot, ordered by id
    async fn find_all(&self) -> Result<Vec<Lot>, StoreError>;

    /// Find a lot by ID
    async fn find_by_id(&self, id: &LotId) -> Result<Option<Lot>, StoreError>;

    /// Insert a new lot; the store assigns the id
    async fn create(&self, lot: &NewLot) -> Result<Lot, StoreError>;

    /// Replace every column except the id; `None` when no row matched
    async fn update(&self, id: &LotId, lot: &NewLot) -> Result<Option<Lot>, StoreError>;

    /// Delete a lot by ID; a missing id is not an error
    async fn delete(&self, id: &LotId) -> Result<(), StoreError>;
}
