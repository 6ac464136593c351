//! AppMessage enum for results coming back from service tasks.

use crate::error::StrideResult;
use crate::models::{Author, Comment, FeedPage, Friend, PostId, PostWithAuthor};

/// Results of spawned service calls, applied on the UI task.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Signed-in user resolved
    CurrentUserLoaded(StrideResult<Author>),
    /// Initial load or refresh finished
    FirstPageLoaded {
        generation: u64,
        result: StrideResult<FeedPage>,
    },
    /// Pagination load finished
    PageLoaded {
        generation: u64,
        result: StrideResult<FeedPage>,
    },
    /// Like or unlike finished; `liked` is the value that was sent
    LikeSettled {
        post_id: PostId,
        liked: bool,
        result: StrideResult<()>,
    },
    DeleteSettled {
        post_id: PostId,
        result: StrideResult<()>,
    },
    PostCreated(StrideResult<PostWithAuthor>),
    CommentsLoaded {
        post_id: PostId,
        result: StrideResult<Vec<Comment>>,
    },
    CommentAdded {
        post_id: PostId,
        result: StrideResult<Comment>,
    },
    FriendsLoaded(StrideResult<Vec<Friend>>),
}
