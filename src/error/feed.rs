//! Feed domain errors.
//!
//! Failures that come from the feed's own rules rather than from the
//! transport: deleting someone else's post, posting an empty body, and so on.

use thiserror::Error;

use crate::models::PostId;

/// Feed-level error variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// The current user does not own the post.
    #[error("post {post_id} belongs to another user")]
    NotAuthor { post_id: PostId },

    /// The post is gone (deleted elsewhere or never existed).
    #[error("post {post_id} not found")]
    PostNotFound { post_id: PostId },

    /// A post or comment body was blank.
    #[error("body is empty")]
    EmptyBody,

    /// A post body exceeded the maximum length.
    #[error("body is {len} characters, limit is {max}")]
    BodyTooLong { len: usize, max: usize },

    /// The workout line could not be parsed.
    #[error("invalid workout '{input}': {reason}")]
    InvalidWorkout { input: String, reason: String },

    /// The service has no signed-in user.
    #[error("no signed-in user")]
    NoCurrentUser,
}

impl FeedError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::NotAuthor { .. } => "You can only delete your own posts.".to_string(),
            FeedError::PostNotFound { .. } => "That post no longer exists.".to_string(),
            FeedError::EmptyBody => "Write something first.".to_string(),
            FeedError::BodyTooLong { max, .. } => {
                format!("Posts are limited to {} characters.", max)
            }
            FeedError::InvalidWorkout { reason, .. } => {
                format!("Workout not understood: {}", reason)
            }
            FeedError::NoCurrentUser => "You are not signed in.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FeedError::NotAuthor { .. } => "E_FEED_NOT_AUTHOR",
            FeedError::PostNotFound { .. } => "E_FEED_NOT_FOUND",
            FeedError::EmptyBody => "E_FEED_EMPTY",
            FeedError::BodyTooLong { .. } => "E_FEED_TOO_LONG",
            FeedError::InvalidWorkout { .. } => "E_FEED_WORKOUT",
            FeedError::NoCurrentUser => "E_FEED_NO_USER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_post_id() {
        let err = FeedError::NotAuthor {
            post_id: PostId::new("p-42"),
        };
        assert_eq!(err.to_string(), "post p-42 belongs to another user");
    }

    #[test]
    fn test_body_too_long_message() {
        let err = FeedError::BodyTooLong { len: 612, max: 500 };
        assert_eq!(err.to_string(), "body is 612 characters, limit is 500");
        assert_eq!(err.user_message(), "Posts are limited to 500 characters.");
    }
}
