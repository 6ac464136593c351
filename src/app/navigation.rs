//! Navigation methods for the App.

use super::{App, Overlay};
use crate::models::PostId;

impl App {
    /// Id of the selected card, if the feed has any.
    pub fn selected_post_id(&self) -> Option<PostId> {
        self.feed.posts.get(self.selected).map(|p| p.id.clone())
    }

    /// Move selection down in the feed, or within the open overlay.
    pub fn move_down(&mut self) {
        if !self.overlay.is_open() {
            if self.selected + 1 < self.feed.posts.len() {
                self.selected += 1;
            }
            self.notify_selection_appeared();
            self.mark_dirty();
            return;
        }
        match &mut self.overlay {
            Overlay::Detail(detail) => detail.scroll_down(),
            Overlay::Friends(friends) => friends.select_next(),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Move selection up in the feed, or within the open overlay.
    pub fn move_up(&mut self) {
        match &mut self.overlay {
            Overlay::None => self.selected = self.selected.saturating_sub(1),
            Overlay::Detail(detail) => detail.scroll_up(),
            Overlay::Friends(friends) => friends.select_prev(),
            Overlay::Compose(_) | Overlay::ConfirmDelete(_) => return,
        }
        self.mark_dirty();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.mark_dirty();
    }

    pub fn select_last(&mut self) {
        self.selected = self.feed.posts.len().saturating_sub(1);
        self.notify_selection_appeared();
        self.mark_dirty();
    }

    /// Keep the selection inside the collection after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.feed.posts.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll_offset > self.selected {
            self.scroll_offset = self.selected;
        }
    }

    /// The selected card counts as appearing on screen.
    fn notify_selection_appeared(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.on_item_appear(&id);
        }
    }

    /// Called after each frame: if the last card made it into the viewport,
    /// it has appeared.
    pub fn notify_viewport(&mut self) -> bool {
        let Some(last_visible) = self.last_visible else {
            return false;
        };
        match self.feed.posts.get(last_visible).map(|p| p.id.clone()) {
            Some(id) => self.on_item_appear(&id),
            None => false,
        }
    }
}
