//! Search input handling (pure state transitions).
//!
//! Edits the text buffer behind the search box. Every function returns the
//! updated buffer; the caller forwards the new text to the table as a
//! `SetQuery` action whenever it changed. The cursor counts characters, not
//! bytes, so multi-byte input edits cleanly.

/// Search box contents and cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Current text.
    pub text: String,
    /// Cursor position in characters, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl SearchInput {
    /// Empty input with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(mut input: SearchInput, ch: char) -> SearchInput {
    let offset = input.byte_offset(input.cursor);
    input.text.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(mut input: SearchInput) -> SearchInput {
    if input.cursor > 0 {
        let offset = input.byte_offset(input.cursor - 1);
        input.text.remove(offset);
        input.cursor -= 1;
    }
    input
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position. Saturates at the end of the text.
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    let max_cursor = input.text.chars().count();
    input.cursor = (input.cursor + 1).min(max_cursor);
    input
}

/// Clear the text.
pub fn clear_input(_input: SearchInput) -> SearchInput {
    SearchInput::new()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
