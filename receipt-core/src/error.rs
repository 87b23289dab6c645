//! Receipt Core Error Types

use thiserror::Error;

/// Receipt core result type
pub type ReceiptResult<T> = Result<T, ReceiptError>;

/// Receipt core errors
///
/// Callers only ever see the kind; the `reason` on `InvalidInput` is kept for
/// logs and must not be echoed back to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// Payload failed structural or semantic validation
    #[error("Invalid receipt: {reason}")]
    InvalidInput { reason: String },

    /// No score stored under the identifier
    #[error("Receipt {id} not found")]
    NotFound { id: String },
}

impl ReceiptError {
    /// Create an invalid input error
    pub fn invalid(reason: impl Into<String>) -> Self {
        ReceiptError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        ReceiptError::NotFound { id: id.into() }
    }

    /// Check if this is a validation failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ReceiptError::InvalidInput { .. })
    }

    /// Check if this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReceiptError::NotFound { .. })
    }
}
