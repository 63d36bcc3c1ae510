//! Unified error types for the lot desk API
//!
//! This module defines error types for each layer:
//! - `StoreError`: Classified storage outcome returned by repository ports
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::{FieldViolation, ValidationErrors};

/// Class of storage constraint a write ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
}

impl ConstraintKind {
    /// Map a Postgres SQLSTATE to the constraint class it reports.
    ///
    /// Only integrity violations that a client can fix are classified;
    /// everything else is left to the caller as an unexpected failure.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23505" => Some(ConstraintKind::Unique),
            "23503" => Some(ConstraintKind::ForeignKey),
            "23514" => Some(ConstraintKind::Check),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKind::Unique => write!(f, "unique"),
            ConstraintKind::ForeignKey => write!(f, "foreign key"),
            ConstraintKind::Check => write!(f, "check"),
        }
    }
}

/// Storage layer outcome for a failed repository call
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} constraint violated: {message}")]
    Constraint {
        kind: ConstraintKind,
        message: String,
    },

    #[error("Database error: {0}")]
    Unexpected(String),
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict ({kind}): {message}")]
    Conflict {
        kind: ConstraintKind,
        message: String,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Constraint { kind, message } => DomainError::Conflict { kind, message },
            StoreError::Unexpected(msg) => DomainError::Database(msg),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(e: ValidationErrors) -> Self {
        DomainError::Validation(e)
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<Vec<FieldViolation>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Domain(domain) = self;

        let (status, body) = match domain {
            DomainError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not found".to_string(),
                    details: Some(msg),
                    violations: None,
                },
            ),
            DomainError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "Validation error".to_string(),
                    details: None,
                    violations: Some(errors.into_inner()),
                },
            ),
            DomainError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Conflict".to_string(),
                    details: Some(message),
                    violations: None,
                },
            ),
            DomainError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        details: None,
                        violations: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
