//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the state relevant to input handling so the
//! command registry can dispatch without touching the [`crate::app::App`].

/// The surface that currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// The feed itself
    #[default]
    None,
    /// Post detail; typing goes into the comment draft
    Detail,
    /// Compose sheet; typing goes into the focused field
    Compose,
    /// Friends list
    Friends,
    /// Delete confirmation prompt
    ConfirmDelete,
}

impl ModalType {
    /// Whether printable keys are text input in this modal.
    pub fn takes_text(&self) -> bool {
        matches!(self, ModalType::Detail | ModalType::Compose)
    }
}

/// Context information for input handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    /// Current modal type
    pub modal: ModalType,
    /// Whether the feed shows any posts
    pub has_posts: bool,
    /// Whether an error status line is showing
    pub has_error: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_posts(mut self, has_posts: bool) -> Self {
        self.has_posts = has_posts;
        self
    }

    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}
