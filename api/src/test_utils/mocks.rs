//! Mock implementations of port traits
//!
//! In-memory repositories backed by shared tables. Writes that would break
//! a primary key or the lot -> customer reference come back as
//! `StoreError::Constraint`, the same way the PostgreSQL adapter reports them.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Customer, Lot, LotId, NewLot};
use crate::domain::ports::{CustomerRepository, LotRepository};
use crate::error::{ConstraintKind, StoreError};

#[derive(Default)]
struct Tables {
    customers: BTreeMap<String, Customer>,
    lots: BTreeMap<i64, Lot>,
    last_lot_id: i64,
    writes: usize,
    failure: Option<String>,
}

impl Tables {
    fn check_available(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(msg) => Err(StoreError::Unexpected(msg.clone())),
            None => Ok(()),
        }
    }

    fn is_referenced(&self, code: &str) -> bool {
        self.lots.values().any(|l| l.customer_code == code)
    }

    fn require_customer(&self, code: &str) -> Result<(), StoreError> {
        if self.customers.contains_key(code) {
            Ok(())
        } else {
            Err(violation(
                ConstraintKind::ForeignKey,
                "insert or update on table \"lot\" violates foreign key constraint \"lot_customer_code_fkey\"",
            ))
        }
    }
}

fn violation(kind: ConstraintKind, message: &str) -> StoreError {
    StoreError::Constraint {
        kind,
        message: message.to_string(),
    }
}

fn duplicate_customer() -> StoreError {
    violation(
        ConstraintKind::Unique,
        "duplicate key value violates unique constraint \"customer_pkey\"",
    )
}

fn referenced_customer() -> StoreError {
    violation(
        ConstraintKind::ForeignKey,
        "update or delete on table \"customer\" violates foreign key constraint \"lot_customer_code_fkey\" on table \"lot\"",
    )
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Shared tables behind the in-memory repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> InMemoryCustomerRepository {
        InMemoryCustomerRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn lots(&self) -> InMemoryLotRepository {
        InMemoryLotRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn customer_count(&self) -> usize {
        self.tables.read().unwrap().customers.len()
    }

    pub fn lot_count(&self) -> usize {
        self.tables.read().unwrap().lots.len()
    }

    /// Number of write calls that reached the store, successful or not
    pub fn write_count(&self) -> usize {
        self.tables.read().unwrap().writes
    }

    /// Make every following call fail as an unexpected store error
    pub fn fail_with(&self, message: &str) {
        self.tables.write().unwrap().failure = Some(message.to_string());
    }
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

pub struct InMemoryCustomerRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        let tables = self.tables.read().unwrap();
        tables.check_available()?;
        Ok(tables.customers.values().cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Customer>, StoreError> {
        let tables = self.tables.read().unwrap();
        tables.check_available()?;
        Ok(tables.customers.get(code).cloned())
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, StoreError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_available()?;
        tables.writes += 1;

        if tables.customers.contains_key(&customer.code) {
            return Err(duplicate_customer());
        }
        tables
            .customers
            .insert(customer.code.clone(), customer.clone());
        Ok(customer.clone())
    }

    async fn update(
        &self,
        code: &str,
        customer: &Customer,
    ) -> Result<Option<Customer>, StoreError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_available()?;
        tables.writes += 1;

        if !tables.customers.contains_key(code) {
            return Ok(None);
        }
        if customer.code != code {
            if tables.customers.contains_key(&customer.code) {
                return Err(duplicate_customer());
            }
            if tables.is_referenced(code) {
                return Err(referenced_customer());
            }
            tables.customers.remove(code);
        }
        tables
            .customers
            .insert(customer.code.clone(), customer.clone());
        Ok(Some(customer.clone()))
    }

    async fn delete(&self, code: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_available()?;
        tables.writes += 1;

        if tables.is_referenced(code) {
            return Err(referenced_customer());
        }
        tables.customers.remove(code);
        Ok(())
    }
}

// ============================================================================
// In-Memory Lot Repository
// ============================================================================

pub struct InMemoryLotRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl LotRepository for InMemoryLotRepository {
    async fn find_all(&self) -> Result<Vec<Lot>, StoreError> {
        let tables = self.tables.read().unwrap();
        tables.check_available()?;
        Ok(tables.lots.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &LotId) -> Result<Option<Lot>, StoreError> {
        let tables = self.tables.read().unwrap();
        tables.check_available()?;
        Ok(tables.lots.get(&id.0).cloned())
    }

    async fn create(&self, lot: &NewLot) -> Result<Lot, StoreError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_available()?;
        tables.writes += 1;
        tables.require_customer(&lot.customer_code)?;

        tables.last_lot_id += 1;
        let created = Lot::from_new(LotId(tables.last_lot_id), lot.clone());
        tables.lots.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, id: &LotId, lot: &NewLot) -> Result<Option<Lot>, StoreError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_available()?;
        tables.writes += 1;

        if !tables.lots.contains_key(&id.0) {
            return Ok(None);
        }
        tables.require_customer(&lot.customer_code)?;

        let updated = Lot::from_new(*id, lot.clone());
        tables.lots.insert(id.0, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &LotId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_available()?;
        tables.writes += 1;

        tables.lots.remove(&id.0);
        Ok(())
    }
}
