//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Handlers are generic over the
//! repository implementations so the same router runs on PostgreSQL in
//! production and on in-memory repositories in tests.

pub mod customers;
pub mod lots;

pub use customers::{create_customer, delete_customer, get_customer, list_customers, update_customer};
pub use lots::{create_lot, delete_lot, get_lot, list_lots, update_lot};
