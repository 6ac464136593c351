use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, UserId, Workout};
use crate::error::FeedError;

/// Maximum post body length, in characters.
pub const MAX_POST_CHARS: usize = 500;

/// The user who wrote a post or comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    /// Name shown on cards (API sends as "name" on older deployments)
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub handle: String,
}

impl Author {
    pub fn new(id: impl Into<UserId>, display_name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            handle: handle.into(),
        }
    }
}

/// One feed entry: a post together with its author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostWithAuthor {
    pub id: PostId,
    pub author: Author,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub workout: Option<Workout>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    /// Whether the current user has liked this post (API sends as "liked")
    #[serde(default, alias = "liked")]
    pub liked_by_me: bool,
}

impl PostWithAuthor {
    /// Whether `user` wrote this post.
    ///
    /// Only decides whether the delete affordance is shown; the service
    /// enforces ownership on its side.
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author.id == user
    }

    /// Set the like flag and adjust the count to match.
    pub fn set_liked(&mut self, liked: bool) {
        if self.liked_by_me == liked {
            return;
        }
        self.liked_by_me = liked;
        self.like_count = if liked {
            self.like_count.saturating_add(1)
        } else {
            self.like_count.saturating_sub(1)
        };
    }
}

/// Body of a create-post request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Workout>,
}

impl NewPost {
    /// Validate and build a post. The body is trimmed.
    pub fn new(body: &str, workout: Option<Workout>) -> Result<Self, FeedError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(FeedError::EmptyBody);
        }
        let len = body.chars().count();
        if len > MAX_POST_CHARS {
            return Err(FeedError::BodyTooLong {
                len,
                max: MAX_POST_CHARS,
            });
        }
        Ok(Self {
            body: body.to_string(),
            workout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(liked: bool, likes: u32) -> PostWithAuthor {
        PostWithAuthor {
            id: PostId::new("p-1"),
            author: Author::new("u-1", "Mara", "mara"),
            body: "Morning intervals".to_string(),
            workout: None,
            created_at: Utc::now(),
            like_count: likes,
            comment_count: 0,
            liked_by_me: liked,
        }
    }

    #[test]
    fn test_set_liked_adjusts_count() {
        let mut post = sample(false, 3);
        post.set_liked(true);
        assert!(post.liked_by_me);
        assert_eq!(post.like_count, 4);

        post.set_liked(true);
        assert_eq!(post.like_count, 4, "setting the same value is a no-op");

        post.set_liked(false);
        assert_eq!(post.like_count, 3);
    }

    #[test]
    fn test_unlike_never_underflows() {
        let mut post = sample(true, 0);
        post.set_liked(false);
        assert_eq!(post.like_count, 0);
    }

    #[test]
    fn test_is_authored_by() {
        let post = sample(false, 0);
        assert!(post.is_authored_by(&UserId::new("u-1")));
        assert!(!post.is_authored_by(&UserId::new("u-2")));
    }

    #[test]
    fn test_deserialize_with_aliases_and_defaults() {
        let json = r#"{
            "id": 17,
            "author": {"id": 3, "name": "Jo"},
            "body": "Long ride",
            "liked": true
        }"#;
        let post: PostWithAuthor = serde_json::from_str(json).unwrap();
        assert_eq!(post.id.as_str(), "17");
        assert_eq!(post.author.display_name, "Jo");
        assert_eq!(post.author.handle, "");
        assert!(post.liked_by_me);
        assert_eq!(post.like_count, 0);
    }

    #[test]
    fn test_new_post_validation() {
        assert_eq!(NewPost::new("   ", None), Err(FeedError::EmptyBody));
        let long = "x".repeat(MAX_POST_CHARS + 1);
        assert!(matches!(
            NewPost::new(&long, None),
            Err(FeedError::BodyTooLong { len, .. }) if len == MAX_POST_CHARS + 1
        ));
        assert_eq!(NewPost::new("  5k done ", None).unwrap().body, "5k done");
    }
}
