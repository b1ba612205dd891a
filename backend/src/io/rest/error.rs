//! Translation of failures into structured HTTP error responses.
//!
//! Every error body has the shape `{ "message": ..., "errors": [...] }`.
//! Internal details are logged, never sent to the client.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use shared::{ErrorResponse, FieldError};
use tracing::{error, warn};

use crate::domain::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing or empty X-User-Id header")]
    Unauthorized,
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Validation(errors) => ApiError::Validation {
                message: "Validation failed".to_string(),
                errors,
            },
            ReportError::Storage(source) => ApiError::Internal(source),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: "Invalid request body".to_string(),
            errors: vec![FieldError {
                field: "body".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation { message, errors } => {
                warn!("Rejected request: {} ({} field errors)", message, errors.len());
                ErrorResponse { message, errors }
            }
            ApiError::Internal(source) => {
                error!("Internal error: {:?}", source);
                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: Vec::new(),
                }
            }
            other => ErrorResponse {
                message: other.to_string(),
                errors: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for requests that match no route
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route {} not found", uri.path()))
}

/// Response for a handler that panicked; the process keeps serving
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    panic_error(panic.as_ref()).into_response()
}

/// The failure is logged once, when the error is rendered
fn panic_error(panic: &(dyn Any + Send)) -> ApiError {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail))
}
