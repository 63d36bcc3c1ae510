//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - The customer and lot mocks share one set of tables so that key and
//!   reference constraints behave like the real store
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

use std::sync::Arc;

use axum::Router;

use crate::app::{CustomerService, LotService};
use crate::AppState;

/// The production router wired to in-memory repositories
pub fn test_router(store: &InMemoryStore) -> Router {
    let state = AppState {
        customer_service: Arc::new(CustomerService::new(Arc::new(store.customers()))),
        lot_service: Arc::new(LotService::new(Arc::new(store.lots()))),
    };
    crate::build_router(state)
}
