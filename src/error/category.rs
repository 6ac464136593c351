//! Error category classification for unified error handling.
//!
//! Categories drive the feed's status line wording and whether a failed
//! call is worth repeating by hand.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, DNS, timeout).
    /// Generally transient and retryable.
    Network,

    /// The session token was rejected.
    Auth,

    /// Backend errors (HTTP 5xx, service unavailable).
    Server,

    /// Client-side errors (bugs, malformed responses).
    Client,

    /// User action required (invalid input, action not permitted).
    User,

    /// System/OS errors (filesystem, permissions).
    System,

    /// Configuration errors (invalid config file, bad environment value).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and press r to refresh",
            ErrorCategory::Auth => "Set a fresh STRIDE_TOKEN and restart",
            ErrorCategory::Server => "The server is having trouble, try again shortly",
            ErrorCategory::Client => "This may be a bug. Please report it if it persists",
            ErrorCategory::User => "Check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check ~/.config/stride/config.json and STRIDE_* variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
