//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes.

use cafe_core::CoreError;
use cafe_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Optimistic locking mismatch or duplicate unique key (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        current_version: Option<i32>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn version_conflict(current_version: i32) -> Self {
        Self::Conflict {
            message: "Version mismatch - resource was modified by another user".to_string(),
            current_version: Some(current_version),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict {
                message,
                current_version,
                ..
            } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message: match current_version {
                        Some(version) => format!("{} (current version: {})", message, version),
                        None => message,
                    },
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Domain parse errors are client mistakes
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location,
            },
            CoreError::InvalidBatchStatus { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid status: {}. Valid values: active, sold, expired",
                    value
                ),
                field: Some("status".into()),
                location,
            },
            CoreError::InvalidRoastLevel { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid roast_level: {}. Valid values: light, medium, dark",
                    value
                ),
                field: Some("roast_level".into()),
                location,
            },
            CoreError::InvalidLanguage { value, .. } => ApiError::Validation {
                message: format!("Invalid lang: {}. Valid values: es, en", value),
                field: Some("lang".into()),
                location,
            },
            CoreError::InvalidDate { field, value, .. } => ApiError::Validation {
                message: format!("Invalid date for {}: '{}' (expected YYYY-MM-DD)", field, value),
                field: Some(field),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: "A record with the same unique key already exists".to_string(),
                current_version: None,
                location,
            },
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location,
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
