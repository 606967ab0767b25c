//! Response types for the Stay Engine API.
//!
//! This module defines the success bodies that are not plain domain models,
//! the error response structure, and the mapping from [`EngineError`].

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditTrace, Reminder, Room, TrackedDocument};

/// Response body for the `/rooms/search` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSearchResponse {
    /// Number of matching rooms.
    pub count: usize,
    /// Matching rooms in catalogue order.
    pub rooms: Vec<Room>,
}

/// Response body for the `/reminders` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersResponse {
    /// Submitted documents with statuses recomputed.
    pub documents: Vec<TrackedDocument>,
    /// Active reminders.
    pub reminders: Vec<Reminder>,
    /// How each document and charge was assessed.
    pub audit_trace: AuditTrace,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RoomNotFound { room_id } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "ROOM_NOT_FOUND",
                    message,
                    format!("No room with id '{}' exists in the catalogue", room_id),
                ),
            ),
            EngineError::RoomUnavailable { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("ROOM_UNAVAILABLE", message))
            }
            EngineError::InvalidBooking { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_BOOKING",
                    message,
                    "The booking data contains invalid information",
                ),
            ),
            EngineError::InvalidDocument { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DOCUMENT",
                    message,
                    "The document data contains invalid information",
                ),
            ),
            EngineError::InvalidCharge { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_CHARGE",
                    message,
                    "The charge data contains invalid information",
                ),
            ),
            EngineError::InvalidPayment { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_PAYMENT", message))
            }
        }
    }
}
