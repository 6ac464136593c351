//! Default keybindings for the application.
//!
//! Maps key combinations to commands, per surface.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (active on every surface)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings on the feed itself
    pub feed: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            feed: HashMap::new(),
            modal: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_feed_bindings();
        config.setup_modal_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_feed_bindings(&mut self) {
        let bindings = [
            (KeyCombo::plain(KeyCode::Char('q')), Command::Quit),
            (KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown),
            (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
            (KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp),
            (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
            (KeyCombo::plain(KeyCode::Char('g')), Command::SelectFirst),
            (KeyCombo::plain(KeyCode::Home), Command::SelectFirst),
            (KeyCombo::shift(KeyCode::Char('G')), Command::SelectLast),
            (KeyCombo::plain(KeyCode::Char('G')), Command::SelectLast),
            (KeyCombo::plain(KeyCode::End), Command::SelectLast),
            (KeyCombo::plain(KeyCode::Char('l')), Command::ToggleLike),
            (KeyCombo::plain(KeyCode::Char('c')), Command::OpenDetail),
            (KeyCombo::plain(KeyCode::Enter), Command::OpenDetail),
            (KeyCombo::plain(KeyCode::Char('d')), Command::PromptDelete),
            (KeyCombo::plain(KeyCode::Char('n')), Command::OpenCompose),
            (KeyCombo::plain(KeyCode::Char('f')), Command::OpenFriends),
            (KeyCombo::plain(KeyCode::Char('r')), Command::Refresh),
            (KeyCombo::plain(KeyCode::Char('x')), Command::DismissError),
        ];
        self.feed.extend(bindings);
    }

    fn setup_modal_bindings(&mut self) {
        // Text surfaces: printable keys are handled by the registry
        let editing = [
            (KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay),
            (KeyCombo::plain(KeyCode::Enter), Command::Submit),
            (KeyCombo::plain(KeyCode::Backspace), Command::Backspace),
            (KeyCombo::plain(KeyCode::Delete), Command::DeleteChar),
            (KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft),
            (KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight),
            (KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome),
            (KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd),
        ];

        let mut detail: HashMap<_, _> = editing.iter().cloned().collect();
        detail.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        detail.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        self.modal.insert(ModalType::Detail, detail);

        let mut compose: HashMap<_, _> = editing.iter().cloned().collect();
        compose.insert(KeyCombo::plain(KeyCode::Tab), Command::NextField);
        compose.insert(KeyCombo::shift(KeyCode::BackTab), Command::NextField);
        self.modal.insert(ModalType::Compose, compose);

        let friends = HashMap::from([
            (KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay),
            (KeyCombo::plain(KeyCode::Char('q')), Command::CloseOverlay),
            (KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown),
            (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
            (KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp),
            (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
        ]);
        self.modal.insert(ModalType::Friends, friends);

        let confirm = HashMap::from([
            (KeyCombo::plain(KeyCode::Char('y')), Command::ConfirmDelete),
            (KeyCombo::shift(KeyCode::Char('Y')), Command::ConfirmDelete),
            (KeyCombo::plain(KeyCode::Char('n')), Command::CloseOverlay),
            (KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay),
        ]);
        self.modal.insert(ModalType::ConfirmDelete, confirm);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_feed(&self, combo: &KeyCombo) -> Option<&Command> {
        self.feed.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_gesture_keys() {
        let config = KeybindingConfig::new();
        let get = |c| config.get_feed(&KeyCombo::plain(KeyCode::Char(c))).cloned();
        assert_eq!(get('l'), Some(Command::ToggleLike));
        assert_eq!(get('d'), Some(Command::PromptDelete));
        assert_eq!(get('r'), Some(Command::Refresh));
        assert_eq!(get('f'), Some(Command::OpenFriends));
    }

    #[test]
    fn test_confirm_delete_keys() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_modal(ModalType::ConfirmDelete, &KeyCombo::plain(KeyCode::Char('y'))),
            Some(&Command::ConfirmDelete)
        );
        assert_eq!(
            config.get_modal(ModalType::ConfirmDelete, &KeyCombo::plain(KeyCode::Char('n'))),
            Some(&Command::CloseOverlay)
        );
    }

    #[test]
    fn test_ctrl_c_is_global() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(&Command::Quit)
        );
    }
}
