use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, CommentId, PostId};
use crate::error::FeedError;

/// Maximum comment length, in characters.
pub const MAX_COMMENT_CHARS: usize = 280;

/// A comment on a post, shown in the detail surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: Author,
    pub body: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Body of an add-comment request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewComment {
    pub body: String,
}

impl NewComment {
    pub fn new(body: &str) -> Result<Self, FeedError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(FeedError::EmptyBody);
        }
        let len = body.chars().count();
        if len > MAX_COMMENT_CHARS {
            return Err(FeedError::BodyTooLong {
                len,
                max: MAX_COMMENT_CHARS,
            });
        }
        Ok(Self {
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_rejects_blank() {
        assert_eq!(NewComment::new("\n  "), Err(FeedError::EmptyBody));
        assert_eq!(NewComment::new(" nice pace ").unwrap().body, "nice pace");
    }
}
