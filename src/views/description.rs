//! Input rules for the dish `full_description` text area.
//!
//! The caps live in the edit form only; the API stores whatever it gets.

pub const MAX_DESCRIPTION_LINES: usize = 8;
pub const MAX_DESCRIPTION_CHARS: usize = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditRejection {
    TooManyLines,
    TooManyChars,
}

/// A key press as seen by the text area before it edits the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
    Other,
}

impl Key {
    /// Keys that never grow the text.
    pub fn is_edit_safe(self) -> bool {
        matches!(
            self,
            Key::Backspace
                | Key::Delete
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::ArrowUp
                | Key::ArrowDown
        )
    }
}

/// Number of newline-separated lines; empty text is one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Checks a proposed value. The line cap is checked before the character cap.
pub fn check_description(text: &str) -> Result<(), EditRejection> {
    if line_count(text) > MAX_DESCRIPTION_LINES {
        return Err(EditRejection::TooManyLines);
    }
    if char_count(text) > MAX_DESCRIPTION_CHARS {
        return Err(EditRejection::TooManyChars);
    }
    Ok(())
}

/// Whether `key` may reach the text area holding `current`.
pub fn key_allowed(current: &str, key: Key) -> bool {
    if key == Key::Enter && line_count(current) >= MAX_DESCRIPTION_LINES {
        return false;
    }
    if char_count(current) >= MAX_DESCRIPTION_CHARS && !key.is_edit_safe() {
        return false;
    }
    true
}

pub fn counter_label(text: &str) -> String {
    format!(
        "{}/{} linhas - {}/{} caracteres",
        line_count(text),
        MAX_DESCRIPTION_LINES,
        char_count(text),
        MAX_DESCRIPTION_CHARS
    )
}
