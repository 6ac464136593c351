use serde::{Deserialize, Serialize};

use super::PostWithAuthor;

/// One page of the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeedPage {
    #[serde(default)]
    pub posts: Vec<PostWithAuthor>,
    /// Cursor for the next page; `None` once the feed is exhausted
    #[serde(default, alias = "cursor")]
    pub next_cursor: Option<String>,
}

impl FeedPage {
    pub fn new(posts: Vec<PostWithAuthor>, next_cursor: Option<String>) -> Self {
        Self { posts, next_cursor }
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cursor_means_last_page() {
        let page: FeedPage = serde_json::from_str(r#"{"posts": []}"#).unwrap();
        assert!(page.is_last());

        let page: FeedPage = serde_json::from_str(r#"{"posts": [], "cursor": "abc"}"#).unwrap();
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
        assert!(!page.is_last());
    }
}
