//! SeaORM entities
//!
//! Row models for the `customer` and `lot` tables. Written by hand to match
//! `migrations/0001_customers_and_lots.sql`.

pub mod customers;
pub mod lots;
