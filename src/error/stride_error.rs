//! Unified error type for Stride.
//!
//! `StrideError` is what every `FeedService` operation returns on failure,
//! so the view-model can record a failure without caring whether it came
//! from the network, the feed's own rules or the filesystem.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::feed::FeedError;
use super::network::NetworkError;
use super::system::SystemError;

/// Unified error type for Stride.
#[derive(Debug, Clone)]
pub enum StrideError {
    /// Network-related errors (connections, HTTP, timeouts).
    Network(NetworkError),

    /// Feed rule violations (ownership, validation).
    Feed(FeedError),

    /// System/filesystem errors.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<StrideError>,
        context: ErrorContext,
    },
}

impl StrideError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StrideError::Network(err) => match err {
                NetworkError::HttpStatus { status: 401, .. } => ErrorCategory::Auth,
                NetworkError::HttpStatus { status, .. } if *status >= 500 => ErrorCategory::Server,
                NetworkError::HttpStatus { .. } => ErrorCategory::User,
                NetworkError::InvalidResponse { .. } => ErrorCategory::Client,
                _ => ErrorCategory::Network,
            },
            StrideError::Feed(FeedError::NoCurrentUser) => ErrorCategory::Auth,
            StrideError::Feed(_) => ErrorCategory::User,
            StrideError::System(err) => {
                if err.is_configuration() {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::System
                }
            }
            StrideError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            StrideError::Network(err) => err.is_retryable(),
            StrideError::Feed(_) => false,
            StrideError::System(err) => err.is_transient(),
            StrideError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StrideError::Network(err) => err.user_message(),
            StrideError::Feed(err) => err.user_message(),
            StrideError::System(err) => err.user_message(),
            StrideError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StrideError::Network(err) => err.error_code(),
            StrideError::Feed(err) => err.error_code(),
            StrideError::System(err) => err.error_code(),
            StrideError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        StrideError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            StrideError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &StrideError {
        match self {
            StrideError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for StrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrideError::Network(err) => write!(f, "{}", err),
            StrideError::Feed(err) => write!(f, "{}", err),
            StrideError::System(err) => write!(f, "{}", err),
            StrideError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for StrideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrideError::Network(err) => Some(err),
            StrideError::Feed(err) => Some(err),
            StrideError::System(err) => Some(err),
            StrideError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for StrideError {
    fn from(err: NetworkError) -> Self {
        StrideError::Network(err)
    }
}

impl From<FeedError> for StrideError {
    fn from(err: FeedError) -> Self {
        StrideError::Feed(err)
    }
}

impl From<SystemError> for StrideError {
    fn from(err: SystemError) -> Self {
        StrideError::System(err)
    }
}

impl From<std::io::Error> for StrideError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        StrideError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for StrideError {
    fn from(err: serde_json::Error) -> Self {
        StrideError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

impl From<reqwest::Error> for StrideError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        StrideError::Network(super::network::classify_reqwest_error(&err, &url, None))
    }
}
