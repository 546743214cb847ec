//! Single-line text input (pure state transitions).
//!
//! The cursor is a character index, not a byte offset, so umlauts and other
//! multi-byte characters edit correctly.

/// Editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input prefilled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// True when only whitespace was entered.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. No-op at position 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor. No-op at the end.
    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    /// Saturates at 0.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Saturates at the end of the text.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Cursor past the last character.
    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Empty the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for ch in text.chars() {
            input.insert_char(ch);
        }
        input
    }

    #[test]
    fn insert_appends_at_cursor() {
        let input = typed("Milch");
        assert_eq!(input.value(), "Milch");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = typed("Mlch");
        input.cursor_home();
        input.cursor_right();
        input.insert_char('i');
        assert_eq!(input.value(), "Milch");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_value("abc");
        input.cursor_home();
        input.backspace();
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn backspace_handles_multibyte_characters() {
        let mut input = typed("Käse");
        input.cursor_left();
        input.cursor_left();
        input.backspace();
        assert_eq!(input.value(), "Kse");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = TextInput::with_value("Brot");
        input.cursor_home();
        input.delete();
        assert_eq!(input.value(), "rot");
        input.cursor_end();
        input.delete();
        assert_eq!(input.value(), "rot");
    }

    #[test]
    fn cursor_right_saturates_at_end() {
        let mut input = TextInput::with_value("ab");
        input.cursor_right();
        input.cursor_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn trimmed_and_blank() {
        let input = TextInput::with_value("   ");
        assert!(input.is_blank());
        let input = TextInput::with_value("  Tee ");
        assert_eq!(input.trimmed(), "Tee");
    }
}
