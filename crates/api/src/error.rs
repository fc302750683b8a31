//! API error types with HTTP response mapping.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// Body for a create or replace payload that fails validation.
pub const INCOMPLETE_ORDER: &str = "Incomplete order data";
/// Body for a partial update without an object payload.
pub const NO_UPDATE_DATA: &str = "No data provided for update";
/// Body for a request naming an unknown order.
pub const ORDER_NOT_FOUND: &str = "Order not found";
/// Body for every unexpected failure. The cause is only logged.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"error": <message>}`.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound,
    /// Bad request from the client.
    BadRequest(&'static str),
    /// Internal server error. The detail is logged, never returned.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, ORDER_NOT_FOUND),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                metrics::counter!("http_internal_errors_total").increment(1);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidOrder(_) => ApiError::BadRequest(INCOMPLETE_ORDER),
            DomainError::EmptyPatch => ApiError::BadRequest(NO_UPDATE_DATA),
            DomainError::NotFound(_) => ApiError::NotFound,
        }
    }
}

/// Renders a panic caught while handling a request as a generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}
