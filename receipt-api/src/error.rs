//! API Error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::ReceiptError;
use serde::Serialize;
use thiserror::Error;

/// Client-facing message for any rejected receipt
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid. Please verify input.";

/// Client-facing message for an unknown receipt id
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid receipt: {reason}")]
    InvalidReceipt { reason: String },

    #[error("Receipt not found: {id}")]
    NotFound { id: String },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidReceipt { .. } => "INVALID_RECEIPT",
            ApiError::NotFound { .. } => "NOT_FOUND",
        }
    }

    /// Message returned to the client; internal reasons stay in the logs
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::InvalidReceipt { .. } => INVALID_RECEIPT_MESSAGE,
            ApiError::NotFound { .. } => RECEIPT_NOT_FOUND_MESSAGE,
        }
    }
}

impl From<ReceiptError> for ApiError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::InvalidInput { reason } => ApiError::InvalidReceipt { reason },
            ReceiptError::NotFound { id } => ApiError::NotFound { id },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidReceipt {
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message().to_string(),
            code: self.error_code().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
