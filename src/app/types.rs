//! Type definitions for the application state.

use crate::input::ModalType;
use crate::models::PostId;
use crate::state::{ComposeState, DetailState, FriendsState};

/// Surface presented over the feed. At most one at a time.
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Post detail with comments (the comment gesture)
    Detail(DetailState),
    /// New post sheet
    Compose(ComposeState),
    /// Friends list (the empty-feed call to action)
    Friends(FriendsState),
    /// Asking the user to confirm deleting their post
    ConfirmDelete(PostId),
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }

    /// Whether the overlay is waiting on the service.
    pub fn is_busy(&self) -> bool {
        match self {
            Overlay::Detail(detail) => detail.loading || detail.submitting,
            Overlay::Compose(compose) => compose.submitting,
            Overlay::Friends(friends) => friends.loading,
            Overlay::None | Overlay::ConfirmDelete(_) => false,
        }
    }

    /// The input modal this overlay puts the keyboard in.
    pub fn modal(&self) -> ModalType {
        match self {
            Overlay::None => ModalType::None,
            Overlay::Detail(_) => ModalType::Detail,
            Overlay::Compose(_) => ModalType::Compose,
            Overlay::Friends(_) => ModalType::Friends,
            Overlay::ConfirmDelete(_) => ModalType::ConfirmDelete,
        }
    }
}
