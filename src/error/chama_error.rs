//! Unified error type for the chama client.

use thiserror::Error;

use super::network::NetworkError;
use super::validation::ValidationError;

/// Unified error type.
///
/// Screens never see this type directly: read screens consume
/// [`NetworkError`] through the fetch lifecycle and forms consume
/// [`ValidationError`]. `ChamaError` is what startup and glue code return.
#[derive(Debug, Error)]
pub enum ChamaError {
    /// A remote call failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A form input was rejected locally.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration could not be assembled.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChamaError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ChamaError::Network(err) => err.user_message(),
            ChamaError::Validation(err) => err.to_string(),
            ChamaError::Config(msg) => format!("Invalid configuration: {}", msg),
            ChamaError::Io(err) => format!("A local I/O operation failed: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChamaError::Network(err) => err.error_code(),
            ChamaError::Validation(_) => "E_VALIDATION",
            ChamaError::Config(_) => "E_CONFIG",
            ChamaError::Io(_) => "E_IO",
        }
    }
}

/// Type alias for Results using ChamaError.
pub type ChamaResult<T> = Result<T, ChamaError>;
