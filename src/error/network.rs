//! Network-related error types.
//!
//! This module defines errors that occur while talking to the feed API.

use std::fmt;
use std::time::Duration;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out. `duration_secs` is the configured limit when known.
    Timeout {
        operation: String,
        duration_secs: Option<u64>,
    },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by server.
    RateLimited { retry_after_secs: Option<u64> },

    /// Response body did not match the expected shape.
    InvalidResponse { message: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::RateLimited { .. } => true,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the feed server. Check your connection.".to_string()
            }
            NetworkError::Timeout {
                operation,
                duration_secs: Some(secs),
            } => format!("{} timed out after {}s.", operation, secs),
            NetworkError::Timeout { operation, .. } => format!("{} timed out.", operation),
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was rejected by the server.".to_string(),
                401 => "Your session has expired. Sign in again.".to_string(),
                403 => "You are not allowed to do that.".to_string(),
                404 => "That post no longer exists.".to_string(),
                429 => "Too many requests. Wait a moment and try again.".to_string(),
                500..=599 => "The server is having trouble. Try again later.".to_string(),
                _ => format!("The server returned HTTP {}.", status),
            },
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => format!("Too many requests. Wait {}s and try again.", secs),
                None => "Too many requests. Wait a moment and try again.".to_string(),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the server.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited { .. } => "E_NET_RATE",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout {
                operation,
                duration_secs: Some(secs),
            } => write!(f, "{} timed out after {} seconds", operation, secs),
            NetworkError::Timeout { operation, .. } => write!(f, "{} timed out", operation),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            NetworkError::InvalidResponse { message } => write!(f, "Invalid response: {}", message),
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a reqwest error into a NetworkError.
///
/// `timeout` is the limit the client was built with, reported on timeouts.
pub fn classify_reqwest_error(
    err: &reqwest::Error,
    url: &str,
    timeout: Option<Duration>,
) -> NetworkError {
    if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        NetworkError::Timeout {
            operation: "HTTP request".to_string(),
            duration_secs: timeout.map(|t| t.as_secs()),
        }
    } else if err.is_status() {
        match err.status().map(|s| s.as_u16()) {
            Some(429) => NetworkError::RateLimited {
                retry_after_secs: None,
            },
            Some(status) => NetworkError::HttpStatus {
                status,
                message: err.to_string(),
            },
            None => NetworkError::HttpStatus {
                status: 0,
                message: err.to_string(),
            },
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            message: format!("Failed to decode response: {}", err),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_retryable() {
        let server = NetworkError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        };
        let client = NetworkError::HttpStatus {
            status: 400,
            message: "bad".to_string(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_user_message_for_forbidden() {
        let err = NetworkError::HttpStatus {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.user_message(), "You are not allowed to do that.");
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_timeout_reports_known_limit_only() {
        let known = NetworkError::Timeout {
            operation: "HTTP request".to_string(),
            duration_secs: Some(15),
        };
        let unknown = NetworkError::Timeout {
            operation: "HTTP request".to_string(),
            duration_secs: None,
        };
        assert_eq!(known.user_message(), "HTTP request timed out after 15s.");
        assert_eq!(unknown.user_message(), "HTTP request timed out.");
        assert_eq!(unknown.to_string(), "HTTP request timed out");
    }

    #[test]
    fn test_display() {
        assert_eq!(NetworkError::Cancelled.to_string(), "Request cancelled");
        assert_eq!(
            NetworkError::RateLimited {
                retry_after_secs: Some(5)
            }
            .to_string(),
            "Rate limited, retry after 5 seconds"
        );
    }
}
