//! Gestures on the feed screen.
//!
//! Every gesture checks and updates [`crate::state::FeedState`] on the UI
//! task first, then spawns the service call. Reads go into the app's
//! `JoinSet` and are aborted with the screen; mutations are detached and
//! always reach the service.

use std::future::Future;
use std::sync::atomic::Ordering;

use super::{App, AppMessage, Overlay};
use crate::models::PostId;
use crate::state::{ComposeState, DetailState, FriendsState};

impl App {
    /// Spawn a read bound to the screen's lifetime.
    fn spawn_read<F>(&mut self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        self.reads.spawn(async move {
            let _ = tx.send(task.await);
        });
    }

    /// Spawn a mutation that runs to completion even if the screen goes away.
    fn spawn_mutation<F>(&self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        let in_flight = self.mutations.clone();
        in_flight.fetch_add(1, Ordering::AcqRel);
        tokio::spawn(async move {
            let msg = task.await;
            in_flight.fetch_sub(1, Ordering::AcqRel);
            if tx.send(msg).is_err() {
                tracing::debug!("feed screen closed, mutation result dropped");
            }
        });
    }

    fn spawn_current_user(&mut self) {
        if self.feed.current_user.is_some() {
            return;
        }
        let service = self.service.clone();
        self.spawn_read(async move { AppMessage::CurrentUserLoaded(service.current_user().await) });
    }

    fn spawn_first_page(&mut self, generation: u64) {
        let service = self.service.clone();
        let limit = self.page_size;
        self.spawn_read(async move {
            let result = service.fetch_feed(None, limit).await;
            AppMessage::FirstPageLoaded { generation, result }
        });
    }

    /// First appearance of the screen: start the initial load.
    ///
    /// Returns `false` if a load is already running or the feed has loaded.
    pub fn on_appear(&mut self) -> bool {
        let Some(generation) = self.feed.begin_initial_load() else {
            return false;
        };
        tracing::info!(generation, page_size = self.page_size, "initial feed load");
        self.spawn_current_user();
        self.spawn_first_page(generation);
        self.mark_dirty();
        true
    }

    /// Refresh gesture. The refresh indicator stays on until the request
    /// completes, whatever its outcome.
    ///
    /// Returns `false` if a load or refresh is already running.
    pub fn refresh(&mut self) -> bool {
        let Some(generation) = self.feed.begin_refresh() else {
            tracing::debug!("refresh ignored, already loading");
            return false;
        };
        tracing::info!(generation, "refreshing feed");
        self.spawn_current_user();
        self.spawn_first_page(generation);
        self.mark_dirty();
        true
    }

    /// An item came into view. Only the last item triggers a page load.
    pub fn on_item_appear(&mut self, post_id: &PostId) -> bool {
        if !self.feed.is_last(post_id) {
            return false;
        }
        self.load_more()
    }

    /// Load the next page, at most one request at a time.
    pub fn load_more(&mut self) -> bool {
        let Some(request) = self.feed.begin_load_more() else {
            return false;
        };
        tracing::debug!(cursor = %request.cursor, "loading next page");
        let service = self.service.clone();
        let limit = self.page_size;
        self.spawn_read(async move {
            let result = service.fetch_feed(Some(&request.cursor), limit).await;
            AppMessage::PageLoaded {
                generation: request.generation,
                result,
            }
        });
        self.mark_dirty();
        true
    }

    /// Like gesture: flip the like optimistically and tell the service.
    pub fn toggle_like(&mut self, post_id: &PostId) -> bool {
        let Some(liked) = self.feed.begin_toggle_like(post_id) else {
            return false;
        };
        tracing::debug!(post_id = %post_id, liked, "toggling like");
        let service = self.service.clone();
        let post_id = post_id.clone();
        self.spawn_mutation(async move {
            let result = if liked {
                service.like_post(&post_id).await
            } else {
                service.unlike_post(&post_id).await
            };
            AppMessage::LikeSettled {
                post_id,
                liked,
                result,
            }
        });
        self.mark_dirty();
        true
    }

    /// Delete gesture. Only the current user's own posts are sent; the
    /// service still decides whether the delete is allowed.
    pub fn request_delete(&mut self, post_id: &PostId) -> bool {
        if !self.feed.begin_delete(post_id) {
            tracing::debug!(post_id = %post_id, "delete not offered for this post");
            return false;
        }
        tracing::info!(post_id = %post_id, "deleting post");
        let service = self.service.clone();
        let post_id = post_id.clone();
        self.spawn_mutation(async move {
            let result = service.delete_post(&post_id).await;
            AppMessage::DeleteSettled { post_id, result }
        });
        self.mark_dirty();
        true
    }

    /// Ask for confirmation before deleting the selected post.
    pub fn prompt_delete(&mut self) -> bool {
        match self.selected_post_id() {
            Some(id) if self.feed.can_delete(&id) => {
                self.overlay = Overlay::ConfirmDelete(id);
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    /// Confirm the pending delete prompt.
    pub fn confirm_delete(&mut self) -> bool {
        let Overlay::ConfirmDelete(id) = &self.overlay else {
            return false;
        };
        let id = id.clone();
        self.overlay = Overlay::None;
        self.mark_dirty();
        self.request_delete(&id)
    }

    /// Comment gesture: open the detail surface and fetch its comments.
    pub fn open_detail(&mut self, post_id: &PostId) -> bool {
        if self.feed.get(post_id).is_none() {
            return false;
        }
        self.overlay = Overlay::Detail(DetailState::new(post_id.clone()));
        let service = self.service.clone();
        let post_id = post_id.clone();
        self.spawn_read(async move {
            let result = service.fetch_comments(&post_id).await;
            AppMessage::CommentsLoaded { post_id, result }
        });
        self.mark_dirty();
        true
    }

    /// Post the draft comment in the open detail surface.
    pub fn submit_comment(&mut self) -> bool {
        let Overlay::Detail(detail) = &mut self.overlay else {
            return false;
        };
        if detail.submitting {
            return false;
        }
        let comment = match detail.begin_submit() {
            Ok(comment) => comment,
            Err(err) => {
                detail.error = Some(err.user_message());
                self.mark_dirty();
                return false;
            }
        };
        let service = self.service.clone();
        let post_id = detail.post_id.clone();
        self.spawn_mutation(async move {
            let result = service.add_comment(&post_id, &comment).await;
            AppMessage::CommentAdded { post_id, result }
        });
        self.mark_dirty();
        true
    }

    /// Compose gesture.
    pub fn open_compose(&mut self) {
        self.overlay = Overlay::Compose(ComposeState::new());
        self.mark_dirty();
    }

    /// Publish the compose draft. Validation errors stay on the sheet.
    pub fn submit_compose(&mut self) -> bool {
        let Overlay::Compose(compose) = &mut self.overlay else {
            return false;
        };
        let Some(post) = compose.begin_submit() else {
            self.mark_dirty();
            return false;
        };
        tracing::info!(chars = post.body.chars().count(), workout = post.workout.is_some(), "publishing post");
        let service = self.service.clone();
        self.spawn_mutation(async move { AppMessage::PostCreated(service.create_post(&post).await) });
        self.mark_dirty();
        true
    }

    /// Open the friends list.
    pub fn open_friends(&mut self) {
        self.overlay = Overlay::Friends(FriendsState::loading());
        let service = self.service.clone();
        self.spawn_read(async move { AppMessage::FriendsLoaded(service.fetch_friends().await) });
        self.mark_dirty();
    }

    pub fn close_overlay(&mut self) -> bool {
        if !self.overlay.is_open() {
            return false;
        }
        self.overlay = Overlay::None;
        self.mark_dirty();
        true
    }

    /// Hide the error status line.
    pub fn dismiss_error(&mut self) -> bool {
        let dismissed = self.feed.dismiss_error();
        if dismissed {
            self.mark_dirty();
        }
        dismissed
    }

    pub fn quit(&mut self) {
        self.shutdown();
    }
}
