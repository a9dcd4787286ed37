//! HTTP Error Handling
//!
//! Maps service and validation failures to HTTP status codes:
//! 400 for validation/duplicate/absent-on-delete, 404 for missing-by-id,
//! 500 for unexpected failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// A per-field validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

/// API error
#[derive(Debug)]
pub enum ApiError {
    /// Rejected input or business rule (400)
    BadRequest(String),
    /// Request body failed the content rules (400, per-field messages)
    Validation(Vec<FieldError>),
    /// Missing resource (404)
    NotFound(String),
    /// Unexpected failure (500)
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: msg,
                        details: None,
                    },
                )
            }
            ApiError::Validation(details) => {
                tracing::warn!(violations = details.len(), "Request validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: "Requisição inválida".to_string(),
                        details: Some(details),
                    },
                )
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorBody {
                        error: msg,
                        details: None,
                    },
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: msg,
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { id } => {
                ApiError::NotFound(format!("Texto não encontrado com o ID: {}", id))
            }
            ApplicationError::Repository(msg) => ApiError::Internal(msg),
        }
    }
}
