//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so
//! every endpoint fails the same way.
//!
//! `SlotUnavailable` gets special treatment: it is returned as 409 with a
//! machine-readable `code` so booking UIs can distinguish "somebody got
//! there first, re-query availability" from a generic failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chairtime_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `BookingError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidService(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::SlotUnavailable => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = match &self.0 {
            BookingError::SlotUnavailable => Json(json!({
                "error": message,
                "code": "slot_unavailable",
            })),
            _ => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, BookingError>`
/// inside handlers that return `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Allows using `?` with repository functions returning
/// `Result<T, eyre::Report>`; the error surfaces as the persistence
/// variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}
