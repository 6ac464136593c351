//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockFeedService`] - Feed service with scripted pages, failures and held calls

pub mod feed;

pub use feed::{MockFeedService, MockOp, RecordedCall};
