//! Network-related error types.
//!
//! Every failure of a remote call (transport, status, timeout, cancellation,
//! undecodable body) is reported as a [`NetworkError`]. Callers treat it as a
//! single "request failed" signal; the variant only feeds diagnostics.

use std::fmt;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        operation: String,
        duration_secs: u64,
    },

    /// HTTP status error (non-2xx response).
    HttpStatus {
        status: u16,
        message: String,
    },

    /// The body could not be decoded into the expected shape.
    InvalidResponse {
        message: String,
    },

    /// Request was cancelled before a response arrived.
    Cancelled,

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { operation, duration_secs } => {
                format!(
                    "The {} request timed out after {} seconds. The server may be slow or unreachable.",
                    operation, duration_secs
                )
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                401 => "Authentication required. Please sign in again.".to_string(),
                403 => "Access denied. You don't have permission for this action.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}). Please try again.", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Message sent back by the server with an error status, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            NetworkError::HttpStatus { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    ///
    /// Advisory only; the client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request failed: ")?;
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "connection to '{}' failed: {}", url, message)
            }
            NetworkError::Timeout { operation, duration_secs } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "invalid response: {}", message)
            }
            NetworkError::Cancelled => write!(f, "cancelled"),
            NetworkError::Other { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

/// Classify a reqwest error into a NetworkError.
///
/// `timeout_secs` is the timeout the client was configured with, reported back
/// when the request hit it.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str, timeout_secs: u64) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout {
            operation: request_path(url),
            duration_secs: timeout_secs,
        }
    } else if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            message: format!("Failed to decode response: {}", err),
        }
    } else if err.is_builder() {
        NetworkError::Other {
            message: format!("Invalid request for '{}': {}", url, err),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}

/// Path portion of a URL, used to name the operation in timeout messages.
fn request_path(url: &str) -> String {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);

    match without_scheme.find('/') {
        Some(idx) => without_scheme[idx..].to_string(),
        None => "/".to_string(),
    }
}
