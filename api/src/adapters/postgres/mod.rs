//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod customer_repo;
pub mod lot_repo;
pub mod schema;


pub use customer_repo::PostgresCustomerRepository;
pub use lot_repo::PostgresLotRepository;
pub use schema::apply_schema;

use sea_orm::{DbErr, RuntimeErr};

use crate::error::{ConstraintKind, StoreError};

/// Classify a SeaORM error by the SQLSTATE Postgres reported.
///
/// Unique, foreign key and check violations become `StoreError::Constraint`
/// carrying the server message; anything else is `StoreError::Unexpected`.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    if let Some((code, message)) = database_error(&err) {
        if let Some(kind) = ConstraintKind::from_sqlstate(&code) {
            return StoreError::Constraint { kind, message };
        }
    }
    StoreError::Unexpected(err.to_string())
}

/// SQLSTATE and message of the server-side error behind `err`, if any
fn database_error(err: &DbErr) -> Option<(String, String)> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) => e,
        _ => return None,
    };

    match runtime {
        RuntimeErr::SqlxError(e) => {
            let db = e.as_database_error()?;
            Some((db.code()?.into_owned(), db.message().to_string()))
        }
        _ => None,
    }
}
