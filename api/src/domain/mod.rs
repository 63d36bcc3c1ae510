//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models and their external representations
//! - `ports`: Trait definitions for external dependencies
//! - `validation`: Field-level checks shared by the entities

pub mod entities;
pub mod ports;
pub mod validation;
