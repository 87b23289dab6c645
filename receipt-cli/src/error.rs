//! CLI Error Types

use receipt_core::ReceiptError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Receipt failed validation
    #[error("{0}")]
    InvalidReceipt(#[from] ReceiptError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Server error
    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::ConfigError {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        CliError::ServerError {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidReceipt(_) => 2,
            CliError::ConfigError { .. } => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(ReceiptError::invalid("bad")).exit_code(), 2);
        assert_eq!(CliError::config("bad port").exit_code(), 3);
        assert_eq!(CliError::server("bind failed").exit_code(), 1);
    }

    #[test]
    fn test_invalid_receipt_message() {
        let err = CliError::from(ReceiptError::invalid("items must contain at least one entry"));
        assert_eq!(err.to_string(), "Invalid receipt: items must contain at least one entry");
    }
}
