//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate representations, call the repositories and translate
//! storage outcomes into domain errors.

pub mod customer_service;
pub mod lot_service;

pub use customer_service::CustomerService;
pub use lot_service::LotService;
