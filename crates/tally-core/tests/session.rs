//! Whole-session tests driving the engine through key scripts.

use pretty_assertions::assert_eq;
use tally_core::{Calculator, UnaryFn};
use tally_test_utils::script::{press_keys, run_script};
use tally_test_utils::tracing_setup::init_test_tracing;

#[test]
fn basic_arithmetic_sessions() {
    init_test_tracing();

    assert_eq!(run_script("2+3="), "5");
    assert_eq!(run_script("10-4="), "6");
    assert_eq!(run_script("6*7="), "42");
    assert_eq!(run_script("9/4="), "2.25");
}

#[test]
fn chained_session_folds_left_to_right() {
    // (2 + 3) * 4 − 5
    assert_eq!(run_script("2+3*4-5="), "15");
}

#[test]
fn decimal_entry_session() {
    assert_eq!(run_script("0.1+0.2="), "0.30000000000000004");
}

#[test]
fn division_by_zero_session() {
    assert_eq!(run_script("10/0="), "Error");
}

#[test]
fn error_recovery_session() {
    // The marker is terminal until a digit starts a fresh number.
    assert_eq!(run_script("10/0=%="), "Error");
    assert_eq!(run_script("10/0=7+3="), "10");
}

#[test]
fn percent_session() {
    assert_eq!(run_script("50%"), "0.5");
    assert_eq!(run_script("200*10%="), "20");
}

#[test]
fn scientific_session_mid_expression() {
    let mut calc = Calculator::new();
    press_keys(&mut calc, "2+9");
    calc.unary(UnaryFn::Sqrt);
    assert_eq!(calc.value(), "3");
    assert_eq!(calc.expression(), "2 +");

    // Still awaiting: equals is a no-op until a fresh operand is typed.
    press_keys(&mut calc, "=");
    assert_eq!(calc.value(), "3");
    press_keys(&mut calc, "4=");
    assert_eq!(calc.value(), "6");
}

#[test]
fn history_tape_across_a_session() {
    let mut calc = Calculator::with_history_capacity(3);
    press_keys(&mut calc, "1+1=2+2=3+3=4+4=");

    let lines: Vec<String> = calc.history().entries().iter().map(|e| e.line()).collect();
    // Capacity 3: the first fold was evicted.
    assert_eq!(lines, vec!["2 + 2 = 4", "3 + 3 = 6", "4 + 4 = 8"]);
}

#[test]
fn repeated_equals_is_idempotent() {
    assert_eq!(run_script("2+3===="), "5");
}

#[test]
fn clear_mid_session_starts_over() {
    let mut calc = Calculator::new();
    press_keys(&mut calc, "12+34");
    calc.clear();
    assert_eq!(calc.value(), "0");
    assert_eq!(calc.expression(), "");
    press_keys(&mut calc, "5+5=");
    assert_eq!(calc.value(), "10");
}
