//! Key bindings for the calculator TUI.
//!
//! Engine keys follow the keyboard mapping: digits and `.` enter tokens,
//! `+ - * /` select operators, Enter or `=` evaluates, Backspace deletes,
//! Esc clears, `%` takes a percentage. Letter keys drive the scientific
//! functions and the TUI chrome. Unrecognized keys are ignored.

use crossterm::event::KeyCode;
use tally_core::{Input, UnaryFn};

/// An action the TUI can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Route an input to the engine.
    Engine(Input),
    /// Switch between the basic and scientific keypads.
    ToggleMode,
    HistoryUp,
    HistoryDown,
    Quit,
    None,
}

/// Resolve a key press to an action.
pub fn resolve(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('m') => Action::ToggleMode,
        KeyCode::Up => Action::HistoryUp,
        KeyCode::Down => Action::HistoryDown,

        KeyCode::Enter => Action::Engine(Input::Equals),
        KeyCode::Backspace => Action::Engine(Input::Backspace),
        KeyCode::Esc => Action::Engine(Input::Clear),

        // Scientific function keys. The app routes them only in
        // scientific mode, mirroring the hidden button group.
        KeyCode::Char('r') => Action::Engine(Input::Unary(UnaryFn::Sqrt)),
        KeyCode::Char('x') => Action::Engine(Input::Unary(UnaryFn::Square)),
        KeyCode::Char('s') => Action::Engine(Input::Unary(UnaryFn::Sin)),
        KeyCode::Char('c') => Action::Engine(Input::Unary(UnaryFn::Cos)),
        KeyCode::Char('t') => Action::Engine(Input::Unary(UnaryFn::Tan)),
        KeyCode::Char('l') => Action::Engine(Input::Unary(UnaryFn::Log10)),

        KeyCode::Char(c) => Input::from_char(c)
            .map(Action::Engine)
            .unwrap_or(Action::None),
        _ => Action::None,
    }
}
