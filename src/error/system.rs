//! System-related error types.
//!
//! Filesystem and environment failures hit while loading configuration or
//! opening the log file.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemError {
    /// File not found.
    FileNotFound { path: PathBuf },

    /// Permission denied for file/directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine configuration directory.
    NoConfigDirectory,

    /// Could not determine data directory.
    NoDataDirectory,

    /// Config file exists but is not valid.
    ConfigParse { path: PathBuf, message: String },

    /// Environment variable set to an invalid value.
    EnvironmentError { variable: String, message: String },
}

impl SystemError {
    /// Check if this error is likely transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, SystemError::IoError { .. })
    }

    /// Whether the user has to fix configuration before continuing.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SystemError::ConfigParse { .. } | SystemError::EnvironmentError { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: {}", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied while trying to {} {}", operation, path.display())
            }
            SystemError::IoError { operation, message, .. } => {
                format!("Failed to {}: {}", operation, message)
            }
            SystemError::NoConfigDirectory => {
                "Could not determine the configuration directory.".to_string()
            }
            SystemError::NoDataDirectory => "Could not determine the data directory.".to_string(),
            SystemError::ConfigParse { path, message } => {
                format!("Invalid config file {}: {}", path.display(), message)
            }
            SystemError::EnvironmentError { variable, message } => {
                format!("Invalid value for {}: {}", variable, message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoConfigDirectory => "E_SYS_NO_CONFIG",
            SystemError::NoDataDirectory => "E_SYS_NO_DATA",
            SystemError::ConfigParse { .. } => "E_SYS_CONFIG",
            SystemError::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::FileNotFound { path } => write!(f, "File not found: {}", path.display()),
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} on {}", operation, path.display())
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "I/O error during {} on {}: {}", operation, p.display(), message),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::NoConfigDirectory => write!(f, "No config directory"),
            SystemError::NoDataDirectory => write!(f, "No data directory"),
            SystemError::ConfigParse { path, message } => {
                write!(f, "Config parse error in {}: {}", path.display(), message)
            }
            SystemError::EnvironmentError { variable, message } => {
                write!(f, "Environment error ({}): {}", variable, message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
