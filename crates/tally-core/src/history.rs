//! Bounded in-memory tape of completed calculations.
//!
//! Every folded binary operation and every applied unary function lands
//! here; the TUI history panel and the REPL `history` command read it back.
//! The tape is session-local and never persisted.

/// A completed calculation: the folded expression and its formatted result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// E.g. `2 + 3` or `sqrt(16)`.
    pub expression: String,
    /// The formatted result text.
    pub result: String,
}

impl Evaluation {
    /// One-line rendering, e.g. `2 + 3 = 5`.
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Ring buffer of the most recent calculations.
#[derive(Debug)]
pub struct History {
    entries: Vec<Evaluation>,
    capacity: usize,
}

impl History {
    /// Create a tape holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: Evaluation) {
        if self.entries.len() >= self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Evaluation] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&Evaluation> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, keeping the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
