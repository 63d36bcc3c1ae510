//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod customer;
pub mod lot;

pub use customer::{Customer, CustomerKind, CustomerRepresentation};
pub use lot::{Currency, Lot, LotId, LotRepresentation, NdsRate, NewLot};
