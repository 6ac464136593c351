//! Feed and overlay command handlers.
//!
//! Maps gestures to the view-model methods on [`App`].

use crate::app::{App, Overlay};
use crate::input::Command;

/// Handles feed gestures and selection movement.
///
/// Returns `true` if the command was handled.
pub fn handle_feed_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::MoveUp => app.move_up(),
        Command::MoveDown => app.move_down(),
        Command::SelectFirst => app.select_first(),
        Command::SelectLast => app.select_last(),
        Command::Refresh => {
            app.refresh();
        }
        Command::ToggleLike => match app.selected_post_id() {
            Some(id) => {
                app.toggle_like(&id);
            }
            None => return false,
        },
        Command::OpenDetail => match app.selected_post_id() {
            Some(id) => {
                app.open_detail(&id);
            }
            None => return false,
        },
        Command::PromptDelete => return app.prompt_delete(),
        Command::OpenCompose => app.open_compose(),
        Command::OpenFriends => app.open_friends(),
        Command::DismissError => return app.dismiss_error(),
        _ => return false,
    }
    true
}

/// Handles commands that act on the open overlay.
pub fn handle_overlay_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::CloseOverlay => app.close_overlay(),
        Command::ConfirmDelete => app.confirm_delete(),
        Command::Submit => {
            if matches!(app.overlay, Overlay::Detail(_)) {
                app.submit_comment()
            } else if matches!(app.overlay, Overlay::Compose(_)) {
                app.submit_compose()
            } else {
                false
            }
        }
        Command::MoveUp => {
            app.move_up();
            true
        }
        Command::MoveDown => {
            app.move_down();
            true
        }
        _ => false,
    }
}
