//! Unified error handling for Stride.
//!
//! - **Error Categories**: classification used for wording and retry hints
//! - **Domain-specific Errors**: network, feed rules, system
//! - **Unified Error Type**: `StrideError`
//! - **Error Context**: which operation and post failed
//! - **Result Type Alias**: `StrideResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Auth | Token rejected | No |
//! | Server | Backend errors (5xx) | Yes |
//! | Client | Malformed responses | No |
//! | User | Not permitted, invalid input | No |
//! | System | Filesystem errors | Sometimes |
//! | Configuration | Config file or environment | No |

mod category;
mod context;
mod feed;
mod network;
mod result;
mod stride_error;
mod system;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use feed::FeedError;
pub use network::{classify_reqwest_error, NetworkError};
pub use result::{ResultExt, StrideResult};
pub use stride_error::StrideError;
pub use system::{classify_io_error, SystemError};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::models::PostId;

    #[test]
    fn test_error_unification() {
        let net_err: StrideError = NetworkError::Timeout {
            operation: "fetch_feed".to_string(),
            duration_secs: Some(30),
        }
        .into();
        let feed_err: StrideError = FeedError::PostNotFound {
            post_id: PostId::new("p-9"),
        }
        .into();
        let sys_err: StrideError = SystemError::NoConfigDirectory.into();

        assert_eq!(net_err.category(), ErrorCategory::Network);
        assert_eq!(feed_err.category(), ErrorCategory::User);
        assert_eq!(sys_err.category(), ErrorCategory::System);

        for err in [&net_err, &feed_err, &sys_err] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: StrideError = io_err.into();
        assert!(matches!(err, StrideError::System(_)));
    }

    #[test]
    fn test_config_error_category() {
        let err: StrideError = SystemError::ConfigParse {
            path: "/tmp/config.json".into(),
            message: "expected value".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
