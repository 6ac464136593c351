//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on which
//! surface owns the keyboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority:
/// 1. Ctrl+C - always quits
/// 2. Modal bindings when an overlay is open; printable keys become text
///    on the detail and compose surfaces
/// 3. Global bindings
/// 4. Feed bindings
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            return self.dispatch_modal(key, &combo, context.modal);
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        match self.config.get_feed(&combo) {
            Some(Command::DismissError) if !context.has_error => None,
            Some(cmd) => Some(cmd.clone()),
            None => None,
        }
    }

    fn dispatch_modal(&self, key: KeyEvent, combo: &KeyCombo, modal: ModalType) -> Option<Command> {
        if let Some(cmd) = self.config.get_modal(modal, combo) {
            return Some(cmd.clone());
        }

        if modal.takes_text() {
            if let KeyCode::Char(c) = key.code {
                let plain = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
                if plain {
                    return Some(Command::InsertChar(c));
                }
            }
        }

        None
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn char_key(c: char) -> KeyEvent {
        make_key_event(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_dispatch_ctrl_c_quits_even_in_modal() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::Compose);
        let key = make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(key, &ctx), Some(Command::Quit));
    }

    #[test]
    fn test_dispatch_feed_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_posts(true);
        assert_eq!(registry.dispatch(char_key('l'), &ctx), Some(Command::ToggleLike));
        assert_eq!(registry.dispatch(char_key('j'), &ctx), Some(Command::MoveDown));
        assert_eq!(registry.dispatch(char_key('q'), &ctx), Some(Command::Quit));
        assert_eq!(registry.dispatch(char_key('z'), &ctx), None);
    }

    #[test]
    fn test_dismiss_only_with_error() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.dispatch(char_key('x'), &InputContext::new()), None);
        let ctx = InputContext::new().with_error(true);
        assert_eq!(registry.dispatch(char_key('x'), &ctx), Some(Command::DismissError));
    }

    #[test]
    fn test_compose_captures_text() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::Compose);
        assert_eq!(registry.dispatch(char_key('q'), &ctx), Some(Command::InsertChar('q')));
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Char('R'), KeyModifiers::SHIFT), &ctx),
            Some(Command::InsertChar('R'))
        );
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Enter, KeyModifiers::NONE), &ctx),
            Some(Command::Submit)
        );
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Tab, KeyModifiers::NONE), &ctx),
            Some(Command::NextField)
        );
    }

    #[test]
    fn test_confirm_prompt_ignores_other_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::ConfirmDelete);
        assert_eq!(registry.dispatch(char_key('y'), &ctx), Some(Command::ConfirmDelete));
        assert_eq!(registry.dispatch(char_key('n'), &ctx), Some(Command::CloseOverlay));
        assert_eq!(registry.dispatch(char_key('l'), &ctx), None);
    }

    #[test]
    fn test_friends_list_navigation() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::Friends);
        assert_eq!(registry.dispatch(char_key('j'), &ctx), Some(Command::MoveDown));
        assert_eq!(registry.dispatch(char_key('a'), &ctx), None);
    }
}
