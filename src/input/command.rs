//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

/// Represents all commands that can be triggered by keyboard input.
///
/// Commands are organized into categories:
/// - Global commands (quit)
/// - Feed gestures (like, comment, delete, compose, refresh)
/// - Navigation (selection and overlay scrolling)
/// - Editing (compose and comment text input)
/// - Overlay commands (submit, confirm, close)
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,

    // =========================================================================
    // Feed Gestures
    // =========================================================================
    /// Toggle like on the selected post (l)
    ToggleLike,
    /// Open the detail surface for the selected post (c, Enter)
    OpenDetail,
    /// Ask to delete the selected post (d, own posts only)
    PromptDelete,
    /// Open the compose sheet (n)
    OpenCompose,
    /// Open the friends list (f)
    OpenFriends,
    /// Refresh the feed (r)
    Refresh,
    /// Dismiss the error status line (x)
    DismissError,

    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move selection up (k, Up)
    MoveUp,
    /// Move selection down (j, Down)
    MoveDown,
    /// Jump to the first post (g)
    SelectFirst,
    /// Jump to the last post (G)
    SelectLast,

    // =========================================================================
    // Editing
    // =========================================================================
    /// Insert a character at cursor position
    InsertChar(char),
    /// Delete character before cursor (Backspace)
    Backspace,
    /// Delete character at cursor (Delete)
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    /// Switch between body and workout fields in compose (Tab)
    NextField,

    // =========================================================================
    // Overlay Commands
    // =========================================================================
    /// Submit the compose sheet or comment draft (Enter)
    Submit,
    /// Confirm delete (y)
    ConfirmDelete,
    /// Close the overlay or cancel the prompt (Esc, n in the prompt)
    CloseOverlay,

    // =========================================================================
    // System Commands
    // =========================================================================
    /// Tick for animations
    Tick,
    /// No operation (used when key should be ignored)
    Noop,
}

impl Command {
    /// Returns true if this command should mark the app as dirty (needs redraw).
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop | Command::Tick)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns true for commands that edit text.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::DeleteChar
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
                | Command::NextField
        )
    }

    /// Returns a human-readable description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit application",
            Command::ToggleLike => "Like or unlike post",
            Command::OpenDetail => "Open post and comments",
            Command::PromptDelete => "Delete post",
            Command::OpenCompose => "New post",
            Command::OpenFriends => "Find friends",
            Command::Refresh => "Refresh feed",
            Command::DismissError => "Dismiss error",
            Command::MoveUp => "Move selection up",
            Command::MoveDown => "Move selection down",
            Command::SelectFirst => "First post",
            Command::SelectLast => "Last post",
            Command::InsertChar(_) => "Insert character",
            Command::Backspace => "Delete previous character",
            Command::DeleteChar => "Delete character",
            Command::MoveCursorLeft => "Move cursor left",
            Command::MoveCursorRight => "Move cursor right",
            Command::MoveCursorHome => "Move cursor to start",
            Command::MoveCursorEnd => "Move cursor to end",
            Command::NextField => "Next field",
            Command::Submit => "Submit",
            Command::ConfirmDelete => "Confirm delete",
            Command::CloseOverlay => "Close",
            Command::Tick => "Animation tick",
            Command::Noop => "No operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_marks_dirty() {
        assert!(Command::InsertChar('a').marks_dirty());
        assert!(Command::ToggleLike.marks_dirty());
        assert!(!Command::Noop.marks_dirty());
        assert!(!Command::Tick.marks_dirty());
    }

    #[test]
    fn test_is_editing() {
        assert!(Command::Backspace.is_editing());
        assert!(!Command::Submit.is_editing());
    }

    #[test]
    fn test_description() {
        assert_eq!(Command::Refresh.description(), "Refresh feed");
    }
}
