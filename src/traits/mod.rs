//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`FeedService`] - Feed backend operations (fetch, like, delete, compose, comments, friends)

pub mod feed;

pub use feed::FeedService;
