//! View-model state
//!
//! - [`FeedState`]: the feed collection, busy flags, cursor and pending mutations
//! - [`DetailState`], [`ComposeState`], [`FriendsState`]: the surfaces opened over the feed

pub mod feed;
pub mod overlay;

pub use feed::{FeedNotice, FeedState, FeedView, PageRequest};
pub use overlay::{ComposeField, ComposeState, DetailState, FriendsState};
