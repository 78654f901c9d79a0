//! Unified error types for the todo API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// A request payload failed the typed validation step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The offending body field.
    pub field: &'static str,
    /// What was wrong with it.
    pub message: &'static str,
}

/// Request-scoped API error. Terminal, never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record matches the requested id.
    #[error("Todo not found")]
    NotFound,

    /// Payload validation failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    detail: Vec<FieldDetail>,
}

#[derive(Debug, Serialize)]
struct FieldDetail {
    loc: Vec<&'static str>,
    msg: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    detail: vec![FieldDetail {
                        loc: vec!["body", err.field],
                        msg: err.message,
                    }],
                }),
            )
                .into_response(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
