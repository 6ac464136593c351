//! Concrete implementations of [`crate::traits::FeedService`].
//!
//! # Adapters
//!
//! - [`HttpFeedService`] - REST API over reqwest
//! - [`MemoryFeedService`] - In-process seeded feed for `--demo`
//!
//! The [`mock`] submodule provides the test double:
//! - [`mock::MockFeedService`] - Scripted pages, failures and held calls

pub mod http_feed;
pub mod memory_feed;
pub mod mock;

pub use http_feed::{HttpFeedService, DEFAULT_API_URL};
pub use memory_feed::MemoryFeedService;
pub use mock::MockFeedService;
