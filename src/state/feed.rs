//! Feed view-model state.
//!
//! [`FeedState`] owns the item collection and every flag the screen reads.
//! All transitions are synchronous methods so the in-flight guards can be
//! checked and set on the UI task before any service call is spawned. The
//! `begin_*` methods decide whether work should start; the `finish_*`
//! methods apply a result that came back from the service.

use std::collections::HashSet;

use crate::error::{StrideError, StrideResult};
use crate::models::{Author, FeedPage, PostId, PostWithAuthor};

/// The three mutually exclusive renderings of the feed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView {
    /// Initial load running and nothing to show yet
    Loading,
    /// Nothing loading and nothing to show
    Empty,
    /// Posts to show, optionally followed by a pagination spinner row
    Populated { trailing_loader: bool },
}

/// Most recent service failure, shown as a dismissible status line.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedNotice {
    /// Short label of the gesture that failed ("like", "refresh", ...)
    pub operation: &'static str,
    pub message: String,
    /// What the user can do about it
    pub hint: Option<&'static str>,
}

impl FeedNotice {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// A pagination request the caller should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub cursor: String,
}

#[derive(Debug, Default)]
pub struct FeedState {
    /// Posts in display order (newest first)
    pub posts: Vec<PostWithAuthor>,
    /// Signed-in user; `None` until `current_user` resolves
    pub current_user: Option<Author>,
    /// Initial load in flight
    pub is_loading: bool,
    /// Refresh in flight; the refresh indicator follows this flag
    pub is_refreshing: bool,
    /// Pagination load in flight
    pub is_loading_more: bool,
    /// Cursor for the next page; `None` after the last page
    pub next_cursor: Option<String>,
    /// A first page (initial or refresh) has been applied
    pub loaded_once: bool,
    /// Bumped by every initial load and refresh; pages tagged with an older
    /// generation are stale
    pub generation: u64,
    pub pending_likes: HashSet<PostId>,
    pub pending_deletes: HashSet<PostId>,
    pub last_error: Option<FeedNotice>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which of the three renderings applies right now.
    pub fn view(&self) -> FeedView {
        if self.posts.is_empty() {
            if self.is_loading {
                FeedView::Loading
            } else {
                FeedView::Empty
            }
        } else {
            FeedView::Populated {
                trailing_loader: self.is_loading_more,
            }
        }
    }

    pub fn get(&self, post_id: &PostId) -> Option<&PostWithAuthor> {
        self.posts.iter().find(|p| &p.id == post_id)
    }

    pub fn position(&self, post_id: &PostId) -> Option<usize> {
        self.posts.iter().position(|p| &p.id == post_id)
    }

    pub fn is_last(&self, post_id: &PostId) -> bool {
        self.posts.last().is_some_and(|p| &p.id == post_id)
    }

    /// Whether a like or delete for this post is still waiting on the service.
    pub fn is_mutation_pending(&self, post_id: &PostId) -> bool {
        self.pending_likes.contains(post_id) || self.pending_deletes.contains(post_id)
    }

    /// Whether the current user wrote this post. Hides or shows the delete
    /// control only; the service decides whether a delete is allowed.
    pub fn is_own_post(&self, post: &PostWithAuthor) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|me| post.is_authored_by(&me.id))
    }

    // ---------------------------------------------------------------------
    // Initial load and refresh
    // ---------------------------------------------------------------------

    /// Start the initial load. Returns the generation to tag the request
    /// with, or `None` if a load is running or the feed already loaded.
    pub fn begin_initial_load(&mut self) -> Option<u64> {
        if self.is_loading || self.is_refreshing || self.loaded_once {
            return None;
        }
        self.is_loading = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Start a refresh. Any pagination result still in flight becomes stale.
    pub fn begin_refresh(&mut self) -> Option<u64> {
        if self.is_loading || self.is_refreshing {
            return None;
        }
        self.is_refreshing = true;
        self.is_loading_more = false;
        self.generation += 1;
        Some(self.generation)
    }

    /// Apply the result of an initial load or refresh.
    ///
    /// Success replaces the collection and cursor. Failure keeps whatever
    /// is shown and records the error. Returns `false` for a stale result.
    pub fn finish_first_page(&mut self, generation: u64, result: StrideResult<FeedPage>) -> bool {
        if generation != self.generation {
            return false;
        }
        let operation = if self.is_refreshing { "refresh" } else { "load feed" };
        self.is_loading = false;
        self.is_refreshing = false;

        match result {
            Ok(page) => {
                self.posts = dedup(page.posts);
                self.next_cursor = page.next_cursor;
                self.loaded_once = true;
                self.pending_likes.retain(|id| self.posts.iter().any(|p| &p.id == id));
                self.pending_deletes.retain(|id| self.posts.iter().any(|p| &p.id == id));
                tracing::info!(
                    operation,
                    count = self.posts.len(),
                    has_more = self.next_cursor.is_some(),
                    "feed page applied"
                );
            }
            Err(err) => self.record_error(operation, &err),
        }
        true
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    /// Whether a pagination request may start now.
    pub fn can_load_more(&self) -> bool {
        self.loaded_once
            && !self.is_loading
            && !self.is_refreshing
            && !self.is_loading_more
            && self.next_cursor.is_some()
    }

    /// Start a pagination load, at most one at a time.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }
        let cursor = self.next_cursor.clone()?;
        self.is_loading_more = true;
        Some(PageRequest {
            generation: self.generation,
            cursor,
        })
    }

    /// Append a page. Posts already present are skipped. A page from before
    /// the latest refresh is dropped.
    pub fn finish_load_more(&mut self, generation: u64, result: StrideResult<FeedPage>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale page");
            return false;
        }
        self.is_loading_more = false;

        match result {
            Ok(page) => {
                let before = self.posts.len();
                for post in page.posts {
                    if self.position(&post.id).is_none() {
                        self.posts.push(post);
                    }
                }
                self.next_cursor = page.next_cursor;
                tracing::debug!(appended = self.posts.len() - before, "page appended");
            }
            Err(err) => self.record_error("load more", &err),
        }
        true
    }

    // ---------------------------------------------------------------------
    // Likes
    // ---------------------------------------------------------------------

    /// Optimistically flip the like on a post.
    ///
    /// Returns the new liked value to send to the service, or `None` if the
    /// post is unknown or already has a mutation in flight.
    pub fn begin_toggle_like(&mut self, post_id: &PostId) -> Option<bool> {
        if self.is_mutation_pending(post_id) {
            return None;
        }
        let post = self.posts.iter_mut().find(|p| &p.id == post_id)?;
        let liked = !post.liked_by_me;
        post.set_liked(liked);
        self.pending_likes.insert(post_id.clone());
        Some(liked)
    }

    /// Settle a like toggle. On failure the optimistic flip is undone.
    pub fn finish_toggle_like(&mut self, post_id: &PostId, liked: bool, result: StrideResult<()>) {
        self.pending_likes.remove(post_id);
        if let Err(err) = result {
            if let Some(post) = self.posts.iter_mut().find(|p| &p.id == post_id) {
                post.set_liked(!liked);
            }
            self.record_error(if liked { "like" } else { "unlike" }, &err);
        }
    }

    // ---------------------------------------------------------------------
    // Deletes
    // ---------------------------------------------------------------------

    /// Whether the delete control should be offered for this post.
    pub fn can_delete(&self, post_id: &PostId) -> bool {
        self.get(post_id).is_some_and(|p| self.is_own_post(p)) && !self.is_mutation_pending(post_id)
    }

    /// Mark a delete as pending. The post stays visible until the service
    /// confirms.
    pub fn begin_delete(&mut self, post_id: &PostId) -> bool {
        if !self.can_delete(post_id) {
            return false;
        }
        self.pending_deletes.insert(post_id.clone());
        true
    }

    pub fn finish_delete(&mut self, post_id: &PostId, result: StrideResult<()>) {
        self.pending_deletes.remove(post_id);
        match result {
            Ok(()) => {
                self.posts.retain(|p| &p.id != post_id);
                self.pending_likes.remove(post_id);
            }
            Err(err) => self.record_error("delete", &err),
        }
    }

    // ---------------------------------------------------------------------
    // Everything else
    // ---------------------------------------------------------------------

    /// Put a freshly created post at the top of the feed.
    pub fn insert_created(&mut self, post: PostWithAuthor) {
        if self.position(&post.id).is_none() {
            self.posts.insert(0, post);
        }
    }

    pub fn increment_comment_count(&mut self, post_id: &PostId) {
        if let Some(post) = self.posts.iter_mut().find(|p| &p.id == post_id) {
            post.comment_count = post.comment_count.saturating_add(1);
        }
    }

    /// Record a failure for the status line.
    pub fn record_error(&mut self, operation: &'static str, err: &StrideError) {
        tracing::warn!(
            operation,
            code = err.error_code(),
            category = %err.category(),
            "{}",
            err
        );
        self.last_error =
            Some(FeedNotice::new(operation, err.user_message()).with_hint(err.recovery_hint()));
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.last_error.take().is_some()
    }
}

/// Keep the first occurrence of every post id.
fn dedup(posts: Vec<PostWithAuthor>) -> Vec<PostWithAuthor> {
    let mut seen = HashSet::with_capacity(posts.len());
    posts
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
