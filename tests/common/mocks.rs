//! Mock service re-exports and small configuration helpers.

pub use stride::adapters::mock::{MockFeedService, MockOp, RecordedCall};
pub use stride::traits::FeedService;

use stride::error::NetworkError;

/// A mock whose current user is `me()` and whose first page is `posts`.
pub fn service_with_page(
    posts: Vec<stride::models::PostWithAuthor>,
    cursor: Option<&str>,
) -> MockFeedService {
    let service = MockFeedService::new();
    service.set_current_user(super::me());
    service.push_page(super::page(posts, cursor));
    service
}

/// A transient server failure.
pub fn server_error() -> NetworkError {
    NetworkError::HttpStatus {
        status: 503,
        message: "unavailable".to_string(),
    }
}
