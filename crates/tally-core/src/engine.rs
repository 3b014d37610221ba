//! The calculator engine — state machine plus mode and history tape.

use std::mem;

use tracing::debug;

use crate::history::History;
use crate::op::{BinaryOp, UnaryFn};
use crate::state::{CalcState, Input, step};

/// Default history tape capacity when none is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Which keypad group the adapter exposes. Purely presentational: the
/// transitions never consult it, and switching modes alters no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Basic,
    Scientific,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Basic => "Basic",
            Mode::Scientific => "Scientific",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Basic => Mode::Scientific,
            Mode::Scientific => Mode::Basic,
        }
    }
}

/// The engine an input adapter drives.
///
/// Constructed independently of any presentation surface. After every
/// mutating call the adapter reads [`Calculator::value`] and
/// [`Calculator::expression`] and writes them to its display.
#[derive(Debug)]
pub struct Calculator {
    state: CalcState,
    mode: Mode,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            state: CalcState::Idle,
            mode: Mode::default(),
            history: History::new(capacity),
        }
    }

    /// Apply one decoded input, recording any completed calculation on the
    /// history tape.
    pub fn apply(&mut self, input: Input) {
        let state = mem::replace(&mut self.state, CalcState::Idle);
        let (next, record) = step(state, input);
        self.state = next;
        if let Some(record) = record {
            self.history.push(record);
        }
    }

    // ── Operation surface ─────────────────────────────────────────

    pub fn digit(&mut self, d: u8) {
        self.apply(Input::Digit(d));
    }

    pub fn point(&mut self) {
        self.apply(Input::Point);
    }

    pub fn operator(&mut self, op: BinaryOp) {
        self.apply(Input::Op(op));
    }

    pub fn equals(&mut self) {
        self.apply(Input::Equals);
    }

    pub fn backspace(&mut self) {
        self.apply(Input::Backspace);
    }

    pub fn percent(&mut self) {
        self.apply(Input::Percent);
    }

    /// Reset the calculation to its defaults. Mode and history survive.
    pub fn clear(&mut self) {
        self.apply(Input::Clear);
    }

    pub fn unary(&mut self, f: UnaryFn) {
        self.apply(Input::Unary(f));
    }

    pub fn sqrt(&mut self) {
        self.unary(UnaryFn::Sqrt);
    }

    pub fn square(&mut self) {
        self.unary(UnaryFn::Square);
    }

    pub fn sin(&mut self) {
        self.unary(UnaryFn::Sin);
    }

    pub fn cos(&mut self) {
        self.unary(UnaryFn::Cos);
    }

    pub fn tan(&mut self) {
        self.unary(UnaryFn::Tan);
    }

    pub fn log10(&mut self) {
        self.unary(UnaryFn::Log10);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!(mode = mode.label(), "mode switched");
        }
        self.mode = mode;
    }

    // ── Readouts ──────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current value text (the result display).
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// Pending-expression text; empty when no operator is pending.
    pub fn expression(&self) -> String {
        self.state.expression()
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let calc = Calculator::new();
        assert_eq!(calc.value(), "0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.mode(), Mode::Basic);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_named_operations_mirror_inputs() {
        let mut calc = Calculator::new();
        calc.digit(2);
        calc.operator(BinaryOp::Add);
        calc.digit(3);
        calc.equals();
        assert_eq!(calc.value(), "5");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_percent_named_operation() {
        let mut calc = Calculator::new();
        calc.digit(5);
        calc.digit(0);
        calc.percent();
        assert_eq!(calc.value(), "0.5");
    }

    #[test]
    fn test_clear_keeps_mode_and_history() {
        let mut calc = Calculator::new();
        calc.set_mode(Mode::Scientific);
        calc.digit(2);
        calc.operator(BinaryOp::Add);
        calc.digit(3);
        calc.equals();
        calc.clear();

        assert_eq!(calc.value(), "0");
        assert_eq!(calc.mode(), Mode::Scientific);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_set_mode_alters_no_calculation_state() {
        let mut calc = Calculator::new();
        calc.digit(1);
        calc.digit(2);
        calc.operator(BinaryOp::Multiply);
        calc.set_mode(Mode::Scientific);
        assert_eq!(calc.value(), "12");
        assert_eq!(calc.expression(), "12 ×");

        calc.digit(3);
        calc.equals();
        assert_eq!(calc.value(), "36");
    }

    #[test]
    fn test_scientific_wrappers() {
        let mut calc = Calculator::new();
        calc.digit(1);
        calc.digit(0);
        calc.digit(0);
        calc.log10();
        assert_eq!(calc.value(), "2");
        calc.clear();

        calc.digit(5);
        calc.square();
        assert_eq!(calc.value(), "25");
    }

    #[test]
    fn test_history_records_evaluations_and_unary() {
        let mut calc = Calculator::with_history_capacity(8);
        calc.digit(2);
        calc.operator(BinaryOp::Add);
        calc.digit(3);
        calc.equals();
        calc.digit(1);
        calc.digit(6);
        calc.sqrt();

        let lines: Vec<String> = calc.history().entries().iter().map(|e| e.line()).collect();
        assert_eq!(lines, vec!["2 + 3 = 5", "sqrt(16) = 4"]);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::Basic.toggled(), Mode::Scientific);
        assert_eq!(Mode::Scientific.toggled(), Mode::Basic);
    }
}
