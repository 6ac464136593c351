//! Input handling module for keyboard and command processing.
//!
//! All key input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use stride::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::App;

impl App {
    /// Snapshot of the state the registry needs.
    pub fn build_input_context(&self) -> InputContext {
        InputContext {
            modal: self.overlay.modal(),
            has_posts: !self.feed.posts.is_empty(),
            has_error: self.feed.last_error.is_some(),
        }
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        if cmd.is_quit() {
            self.quit();
            return true;
        }

        if self.overlay.is_open() {
            if cmd.is_editing() {
                return handlers::handle_editing_command(self, &cmd);
            }
            return handlers::handle_overlay_command(self, &cmd);
        }

        handlers::handle_feed_command(self, &cmd)
    }
}
