//! Message handling for the App.

use super::{App, AppMessage, Overlay};

impl App {
    /// Apply a service result on the UI task.
    /// Every message changes visible state, so the app is marked dirty.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::CurrentUserLoaded(result) => match result {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "signed in");
                    self.feed.current_user = Some(user);
                }
                Err(err) => self.feed.record_error("load profile", &err),
            },

            AppMessage::FirstPageLoaded { generation, result } => {
                if self.feed.finish_first_page(generation, result) {
                    self.clamp_selection();
                }
            }

            AppMessage::PageLoaded { generation, result } => {
                self.feed.finish_load_more(generation, result);
            }

            AppMessage::LikeSettled {
                post_id,
                liked,
                result,
            } => {
                self.feed.finish_toggle_like(&post_id, liked, result);
            }

            AppMessage::DeleteSettled { post_id, result } => {
                let deleted = result.is_ok();
                self.feed.finish_delete(&post_id, result);
                if deleted {
                    tracing::info!(post_id = %post_id, "post deleted");
                    if matches!(&self.overlay, Overlay::Detail(d) if d.post_id == post_id) {
                        self.overlay = Overlay::None;
                    }
                    self.clamp_selection();
                }
            }

            AppMessage::PostCreated(result) => match result {
                Ok(post) => {
                    tracing::info!(post_id = %post.id, "post published");
                    self.feed.insert_created(post);
                    self.selected = 0;
                    self.scroll_offset = 0;
                    if matches!(self.overlay, Overlay::Compose(_)) {
                        self.overlay = Overlay::None;
                    }
                }
                Err(err) => match &mut self.overlay {
                    Overlay::Compose(compose) => {
                        compose.submitting = false;
                        compose.error = Some(err.user_message());
                    }
                    _ => self.feed.record_error("publish", &err),
                },
            },

            AppMessage::CommentsLoaded { post_id, result } => match &mut self.overlay {
                Overlay::Detail(detail) if detail.post_id == post_id => {
                    detail.set_comments(result);
                }
                _ => tracing::debug!(post_id = %post_id, "detail closed, comments dropped"),
            },

            AppMessage::CommentAdded { post_id, result } => {
                if result.is_ok() {
                    self.feed.increment_comment_count(&post_id);
                }
                match &mut self.overlay {
                    Overlay::Detail(detail) if detail.post_id == post_id => {
                        detail.finish_submit(result);
                    }
                    _ => {
                        if let Err(err) = result {
                            self.feed.record_error("comment", &err);
                        }
                    }
                }
            }

            AppMessage::FriendsLoaded(result) => match &mut self.overlay {
                Overlay::Friends(friends) => friends.set_friends(result),
                _ => tracing::debug!("friends list closed, result dropped"),
            },
        }
    }
}
