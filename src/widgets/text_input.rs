//! Single-line text input backed by tui-textarea.
//!
//! The compose sheet and the comment draft only need one line of text, so
//! the wrapper never inserts newlines and adds a character limit on top of
//! `TextArea`. Rendering reads `text()` and `cursor()` and draws its own
//! line, so the widget's ratatui version does not matter here.

use tui_textarea::{CursorMove, TextArea};

/// A one-line editor with an optional character limit.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    textarea: TextArea<'a>,
    max_chars: Option<usize>,
}

impl Default for TextInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TextInput<'a> {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            max_chars: None,
        }
    }

    /// An input that refuses typing past `max` characters.
    pub fn with_limit(max: usize) -> Self {
        Self {
            max_chars: Some(max),
            ..Self::new()
        }
    }

    pub fn inner(&self) -> &TextArea<'a> {
        &self.textarea
    }

    /// Current content. Always a single line.
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or_default()
    }

    /// Cursor column in characters.
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn char_count(&self) -> usize {
        self.text().chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Insert at the cursor. Returns `false` at the limit or for a newline.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c == '\n' || c == '\r' {
            return false;
        }
        if self.max_chars.is_some_and(|max| self.char_count() >= max) {
            return false;
        }
        self.textarea.insert_char(c);
        true
    }

    /// Maps to `delete_char()`
    pub fn backspace(&mut self) {
        self.textarea.delete_char();
    }

    /// Maps to `delete_next_char()`
    pub fn delete_char(&mut self) {
        self.textarea.delete_next_char();
    }

    pub fn move_cursor_left(&mut self) {
        self.textarea.move_cursor(CursorMove::Back);
    }

    pub fn move_cursor_right(&mut self) {
        self.textarea.move_cursor(CursorMove::Forward);
    }

    pub fn move_cursor_home(&mut self) {
        self.textarea.move_cursor(CursorMove::Head);
    }

    pub fn move_cursor_end(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Empty the input, keeping the limit.
    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput<'static> {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut input = typed("5k 🏃");
        assert_eq!(input.char_count(), 4);
        assert_eq!(input.cursor(), 4);
        input.backspace();
        assert_eq!(input.text(), "5k ");
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut input = typed("rn");
        input.move_cursor_left();
        input.insert_char('u');
        assert_eq!(input.text(), "run");
        input.move_cursor_home();
        input.delete_char();
        assert_eq!(input.text(), "un");
        input.move_cursor_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_limit_refuses_extra_input() {
        let mut input = TextInput::with_limit(2);
        assert!(input.insert_char('a'));
        assert!(input.insert_char('b'));
        assert!(!input.insert_char('c'));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_stays_single_line() {
        let mut input = typed("ok");
        assert!(!input.insert_char('\n'));
        assert_eq!(input.inner().lines().len(), 1);
        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.cursor(), 0);
    }
}
