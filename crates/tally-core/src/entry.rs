//! Textual buffer for a number mid-entry.
//!
//! The in-progress number is kept as text so that digits and the decimal
//! separator can be appended incrementally; conversion to a numeric operand
//! happens only at evaluation boundaries via [`EntryBuffer::value`].

/// A number being typed, one token at a time.
///
/// Invariants: never empty, at most one decimal separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
}

impl EntryBuffer {
    /// Start a fresh buffer from a digit.
    pub fn start_digit(d: u8) -> Self {
        Self {
            text: digit_char(d).to_string(),
        }
    }

    /// Start a fresh buffer from the decimal separator: the display
    /// reads `0.` rather than a bare point.
    pub fn start_point() -> Self {
        Self {
            text: "0.".to_string(),
        }
    }

    /// Wrap an already-formatted value so further digits append to it.
    /// Used when `percent` rewrites a buffer mid-entry.
    pub(crate) fn from_text(text: String) -> Self {
        Self { text }
    }

    /// Append a digit. A lone leading `0` is replaced, not prefixed.
    pub fn push_digit(&mut self, d: u8) {
        if self.text == "0" {
            self.text.clear();
        }
        self.text.push(digit_char(d));
    }

    /// Append the decimal separator. No-op when one is already present.
    pub fn push_point(&mut self) {
        if !self.text.contains('.') {
            self.text.push('.');
        }
    }

    /// Drop the last character; a single remaining character resets to `0`.
    pub fn backspace(&mut self) {
        if self.text.len() > 1 {
            self.text.pop();
        } else {
            self.text = "0".to_string();
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Numeric value of the buffer. A trailing separator (`"2."`) parses
    /// the same as the bare integer.
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }
}

fn digit_char(d: u8) -> char {
    (b'0' + (d % 10)) as char
}
