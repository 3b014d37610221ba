//! TUI panel implementations.

pub mod display;
pub mod keypad;

mod history;

pub use history::HistoryPanel;
