//! Feed service trait abstraction.
//!
//! `FeedService` is the backend the feed screen's view-model talks to.
//! The production implementation speaks JSON over HTTP; tests and demo mode
//! use in-process implementations.

use async_trait::async_trait;

use crate::error::StrideResult;
use crate::models::{
    Author, Comment, FeedPage, Friend, NewComment, NewPost, PostId, PostWithAuthor,
};

/// Backend operations behind the feed screen.
///
/// Implementations must enforce post ownership in `delete_post` themselves;
/// the client-side check in the view-model only hides the control.
///
/// # Example
///
/// ```ignore
/// use stride::traits::FeedService;
///
/// async fn first_page<S: FeedService>(service: &S) -> usize {
///     service.fetch_feed(None, 20).await.map(|p| p.posts.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait FeedService: Send + Sync {
    /// The signed-in user.
    async fn current_user(&self) -> StrideResult<Author>;

    /// Fetch one page of the feed, newest first.
    ///
    /// # Arguments
    /// * `cursor` - `None` for the first page, otherwise the previous page's `next_cursor`
    /// * `limit` - Maximum number of posts to return
    async fn fetch_feed(&self, cursor: Option<&str>, limit: usize) -> StrideResult<FeedPage>;

    /// Like a post on behalf of the current user.
    async fn like_post(&self, post_id: &PostId) -> StrideResult<()>;

    /// Remove the current user's like from a post.
    async fn unlike_post(&self, post_id: &PostId) -> StrideResult<()>;

    /// Delete a post owned by the current user.
    async fn delete_post(&self, post_id: &PostId) -> StrideResult<()>;

    /// Publish a new post and return it as the feed would show it.
    async fn create_post(&self, post: &NewPost) -> StrideResult<PostWithAuthor>;

    /// Comments on a post, oldest first.
    async fn fetch_comments(&self, post_id: &PostId) -> StrideResult<Vec<Comment>>;

    /// Add a comment to a post.
    async fn add_comment(&self, post_id: &PostId, comment: &NewComment) -> StrideResult<Comment>;

    /// The current user's friends.
    async fn fetch_friends(&self) -> StrideResult<Vec<Friend>>;
}
