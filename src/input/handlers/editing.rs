//! Editing command handlers.
//!
//! Text input for the comment draft and the compose fields.

use crate::app::{App, Overlay};
use crate::input::Command;
use crate::widgets::TextInput;

/// The input that receives typing on the current surface.
fn active_input(app: &mut App) -> Option<&mut TextInput<'static>> {
    match &mut app.overlay {
        Overlay::Detail(detail) if !detail.submitting => Some(&mut detail.draft),
        Overlay::Compose(compose) if !compose.submitting => Some(compose.focused_mut()),
        _ => None,
    }
}

/// Handles editing-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    if let Command::NextField = cmd {
        return match &mut app.overlay {
            Overlay::Compose(compose) => {
                compose.toggle_focus();
                true
            }
            _ => false,
        };
    }

    let Some(input) = active_input(app) else {
        return false;
    };

    match cmd {
        Command::InsertChar(c) => {
            input.insert_char(*c);
        }
        Command::Backspace => input.backspace(),
        Command::DeleteChar => input.delete_char(),
        Command::MoveCursorLeft => input.move_cursor_left(),
        Command::MoveCursorRight => input.move_cursor_right(),
        Command::MoveCursorHome => input.move_cursor_home(),
        Command::MoveCursorEnd => input.move_cursor_end(),
        _ => return false,
    }
    true
}
