//! Modal dialogs: text prompts, yes/no confirmation and the item form.

use super::item_form::ItemFormState;
use super::text_input::TextInput;
use crate::mediator::ConfirmRequest;
use crate::model::ListId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a text prompt is asking for.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptKind {
    /// Name for a new list.
    NewList,
    /// New name for this list.
    RenameList(ListId),
    /// User to share this list with.
    ShareList(ListId),
    /// New category. When opened from the item form, the form is parked
    /// here and restored afterwards.
    NewCategory {
        /// The item form to return to.
        parked: Option<Box<ItemFormState>>,
    },
}

impl PromptKind {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::NewList => " New list ",
            PromptKind::RenameList(_) => " Rename list ",
            PromptKind::ShareList(_) => " Share list ",
            PromptKind::NewCategory { .. } => " New category ",
        }
    }

    /// Label in front of the input.
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::NewList | PromptKind::RenameList(_) => "List name",
            PromptKind::ShareList(_) => "Share with",
            PromptKind::NewCategory { .. } => "Category name",
        }
    }
}

/// An open text prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptState {
    /// What the text is for.
    pub kind: PromptKind,
    /// Text entered so far.
    pub input: TextInput,
}

impl PromptState {
    /// Prompt with empty input.
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: TextInput::new(),
        }
    }

    /// Prompt starting with `value`, cursor at the end.
    pub fn prefilled(kind: PromptKind, value: &str) -> Self {
        Self {
            kind,
            input: TextInput::with_value(value),
        }
    }
}

/// Result of a key press inside a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keep the prompt open.
    Continue,
    /// Close without submitting.
    Cancel,
    /// Raw entered text. Validation happens in the mediator.
    Submit(String),
}

/// Edit the prompt text; Enter submits, Esc cancels.
pub fn handle_prompt_key(prompt: &mut PromptState, key: KeyEvent) -> PromptOutcome {
    let input = &mut prompt.input;
    match key.code {
        KeyCode::Esc => return PromptOutcome::Cancel,
        KeyCode::Enter => return PromptOutcome::Submit(input.value().to_string()),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.cursor_left(),
        KeyCode::Right => input.cursor_right(),
        KeyCode::Home => input.cursor_home(),
        KeyCode::End => input.cursor_end(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(ch)
        }
        _ => {}
    }
    PromptOutcome::Continue
}

/// Answer to a confirmation dialog, if the key was one.
pub fn confirm_answer(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}

/// The dialog currently on screen, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    /// No dialog.
    #[default]
    None,
    /// Single-line text prompt.
    Prompt(PromptState),
    /// Yes/no question for a destructive action.
    Confirm(ConfirmRequest),
    /// Add or edit an item.
    ItemForm(Box<ItemFormState>),
}

impl Dialog {
    /// True unless [`Dialog::None`].
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn prompt_collects_text_until_enter() {
        let mut prompt = PromptState::new(PromptKind::NewList);
        for ch in "Party".chars() {
            assert_eq!(handle_prompt_key(&mut prompt, key(KeyCode::Char(ch))), PromptOutcome::Continue);
        }
        handle_prompt_key(&mut prompt, key(KeyCode::Backspace));
        assert_eq!(
            handle_prompt_key(&mut prompt, key(KeyCode::Enter)),
            PromptOutcome::Submit("Part".to_string())
        );
    }

    #[test]
    fn prompt_ignores_control_chords() {
        let mut prompt = PromptState::new(PromptKind::NewList);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_prompt_key(&mut prompt, ctrl_c);
        assert_eq!(prompt.input.value(), "");
    }

    #[test]
    fn prefilled_prompt_starts_at_end() {
        let prompt = PromptState::prefilled(PromptKind::RenameList(ListId::new(1)), "Markt");
        assert_eq!(prompt.input.cursor(), 5);
        assert_eq!(prompt.kind.label(), "List name");
    }

    #[test]
    fn confirm_answers() {
        assert_eq!(confirm_answer(key(KeyCode::Char('y'))), Some(true));
        assert_eq!(confirm_answer(key(KeyCode::Esc)), Some(false));
        assert_eq!(confirm_answer(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn default_dialog_is_closed() {
        assert!(!Dialog::default().is_open());
        assert!(Dialog::Prompt(PromptState::new(PromptKind::NewList)).is_open());
    }
}
