//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Keys typed into dialogs never reach
/// this table; only the board and the open list consult it.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind (or rebind) a key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    fn insert(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bind(KeyEvent::new(code, modifiers), action);
    }

    /// Uppercase letters arrive with SHIFT on most terminals and without it
    /// on some; bind both.
    fn insert_upper(&mut self, ch: char, action: KeyAction) {
        self.insert(KeyCode::Char(ch), KeyModifiers::SHIFT, action);
        self.insert(KeyCode::Char(ch), KeyModifiers::NONE, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let mut keys = KeyBindings {
            bindings: HashMap::new(),
        };

        // Navigation
        keys.insert(KeyCode::Char('j'), none, KeyAction::SelectNext);
        keys.insert(KeyCode::Down, none, KeyAction::SelectNext);
        keys.insert(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        keys.insert(KeyCode::Up, none, KeyAction::SelectPrev);
        keys.insert(KeyCode::Home, none, KeyAction::SelectFirst);
        keys.insert(KeyCode::End, none, KeyAction::SelectLast);
        keys.insert(KeyCode::Tab, none, KeyAction::CycleFocus);
        keys.insert(KeyCode::Enter, none, KeyAction::Open);
        keys.insert(KeyCode::Esc, none, KeyAction::Close);

        // Lists
        keys.insert(KeyCode::Char('n'), none, KeyAction::NewList);
        keys.insert(KeyCode::Char('r'), none, KeyAction::Rename);
        keys.insert(KeyCode::Char('d'), none, KeyAction::Delete);
        keys.insert(KeyCode::Delete, none, KeyAction::Delete);
        keys.insert(KeyCode::Char('c'), none, KeyAction::MarkComplete);
        keys.insert(KeyCode::Char('o'), none, KeyAction::Reopen);
        keys.insert(KeyCode::Char('s'), none, KeyAction::Share);

        // Items
        keys.insert(KeyCode::Char('a'), none, KeyAction::AddItem);
        keys.insert(KeyCode::Char('e'), none, KeyAction::EditItem);
        keys.insert(KeyCode::Char(' '), none, KeyAction::ToggleItem);
        keys.insert(KeyCode::Char('f'), none, KeyAction::ToggleCategoryFilter);
        keys.insert_upper('S', KeyAction::CycleSort);
        keys.insert(KeyCode::Char('g'), none, KeyAction::AddCategory);

        // Application
        keys.insert(KeyCode::Char('?'), none, KeyAction::Help);
        keys.insert(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        keys.insert_upper('L', KeyAction::ToggleLogPane);
        keys.insert(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.insert(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn vim_and_arrow_keys_move_selection() {
        let bindings = KeyBindings::default();
        for code in [KeyCode::Char('j'), KeyCode::Down] {
            assert_eq!(bindings.get(key(code, KeyModifiers::NONE)), Some(KeyAction::SelectNext));
        }
        for code in [KeyCode::Char('k'), KeyCode::Up] {
            assert_eq!(bindings.get(key(code, KeyModifiers::NONE)), Some(KeyAction::SelectPrev));
        }
    }

    #[test]
    fn lowercase_c_completes_but_ctrl_c_quits() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(KeyAction::MarkComplete)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn lowercase_s_shares_uppercase_s_sorts() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('s'), KeyModifiers::NONE)),
            Some(KeyAction::Share)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            Some(KeyAction::CycleSort)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('S'), KeyModifiers::NONE)),
            Some(KeyAction::CycleSort)
        );
    }

    #[test]
    fn space_toggles_item() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(KeyAction::ToggleItem)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn bind_overrides_default() {
        let mut bindings = KeyBindings::default();
        bindings.bind(key(KeyCode::Char('x'), KeyModifiers::NONE), KeyAction::Delete);
        bindings.bind(key(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Help);
        assert_eq!(
            bindings.get(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(KeyAction::Delete)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Help)
        );
    }
}
