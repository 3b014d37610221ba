//! The tagged calculation state and its transition function.
//!
//! The machine is explicit: each variant of [`CalcState`] carries only the
//! fields that exist in that phase of a calculation, and [`step`] is a pure
//! function from `(state, input)` to the next state. The [`Calculator`]
//! wrapper in [`crate::engine`] owns a `CalcState` and routes inputs here.
//!
//! [`Calculator`]: crate::engine::Calculator

use tracing::{debug, warn};

use crate::entry::EntryBuffer;
use crate::history::Evaluation;
use crate::op::{BinaryOp, ERROR_DISPLAY, UnaryFn, format_value};

/// The operand captured when a binary operator was selected, plus the
/// operator itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOp {
    /// Display text of the captured operand.
    pub lhs: String,
    pub op: BinaryOp,
}

impl PendingOp {
    /// The pending-expression line, e.g. `12 ×`.
    pub fn expression(&self) -> String {
        format!("{} {}", self.lhs, self.op.glyph())
    }

    fn lhs_value(&self) -> f64 {
        parse_display(&self.lhs)
    }
}

/// Where the calculation currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcState {
    /// Fresh `0` on the display, nothing pending.
    Idle,

    /// The user is typing an operand — the first one (`pending` is `None`)
    /// or the second (`pending` holds the captured operator).
    OperandEntered {
        entry: EntryBuffer,
        pending: Option<PendingOp>,
    },

    /// An operator was just selected; the next digit starts the second
    /// operand. `shown` is the text still on the value line — normally the
    /// captured operand, but backspace, percent, and unary functions edit
    /// it without touching `pending`.
    OperatorPending { pending: PendingOp, shown: String },

    /// A computed result is on the display; the next digit starts a fresh
    /// number. `pending` survives a unary function applied mid-expression.
    ResultDisplayed {
        text: String,
        pending: Option<PendingOp>,
    },

    /// The error marker is on the display. Only digit entry or clear
    /// recovers; everything else is a no-op on this state.
    ErrorDisplayed { pending: Option<PendingOp> },
}

impl CalcState {
    /// Text for the value line.
    pub fn value(&self) -> &str {
        match self {
            CalcState::Idle => "0",
            CalcState::OperandEntered { entry, .. } => entry.as_str(),
            CalcState::OperatorPending { shown, .. } => shown,
            CalcState::ResultDisplayed { text, .. } => text,
            CalcState::ErrorDisplayed { .. } => ERROR_DISPLAY,
        }
    }

    /// Text for the pending-expression line; empty when no operator is
    /// pending.
    pub fn expression(&self) -> String {
        self.pending().map(PendingOp::expression).unwrap_or_default()
    }

    /// The pending binary operation, if any.
    pub fn pending(&self) -> Option<&PendingOp> {
        match self {
            CalcState::Idle => None,
            CalcState::OperatorPending { pending, .. } => Some(pending),
            CalcState::OperandEntered { pending, .. }
            | CalcState::ResultDisplayed { pending, .. }
            | CalcState::ErrorDisplayed { pending } => pending.as_ref(),
        }
    }
}

/// One engine operation, as decoded by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Digit(u8),
    Point,
    Op(BinaryOp),
    Equals,
    Backspace,
    Percent,
    Clear,
    Unary(UnaryFn),
}

impl Input {
    /// The keyboard mapping: digits and `.`, the four ASCII operator keys,
    /// `=`, and `%`. Anything else is not an engine input.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Input::Digit(c as u8 - b'0')),
            '.' => Some(Input::Point),
            '+' => Some(Input::Op(BinaryOp::Add)),
            '-' => Some(Input::Op(BinaryOp::Subtract)),
            '*' => Some(Input::Op(BinaryOp::Multiply)),
            '/' => Some(Input::Op(BinaryOp::Divide)),
            '=' => Some(Input::Equals),
            '%' => Some(Input::Percent),
            _ => None,
        }
    }
}

/// Apply one input to a state. Returns the next state and, when a pending
/// binary operation or unary function produced a result, a record of it for
/// the history tape.
pub fn step(state: CalcState, input: Input) -> (CalcState, Option<Evaluation>) {
    match input {
        Input::Digit(d) => (digit(state, d), None),
        Input::Point => (point(state), None),
        Input::Op(op) => operator(state, op),
        Input::Equals => equals(state),
        Input::Backspace => (backspace(state), None),
        Input::Percent => (percent(state), None),
        Input::Clear => (CalcState::Idle, None),
        Input::Unary(f) => unary(state, f),
    }
}

fn digit(state: CalcState, d: u8) -> CalcState {
    match state {
        CalcState::Idle => CalcState::OperandEntered {
            entry: EntryBuffer::start_digit(d),
            pending: None,
        },
        CalcState::OperandEntered { mut entry, pending } => {
            entry.push_digit(d);
            CalcState::OperandEntered { entry, pending }
        }
        // Awaiting a new entry: the digit starts a fresh number. The
        // pending operation (where one exists) stays armed.
        CalcState::OperatorPending { pending, .. } => CalcState::OperandEntered {
            entry: EntryBuffer::start_digit(d),
            pending: Some(pending),
        },
        CalcState::ResultDisplayed { pending, .. } | CalcState::ErrorDisplayed { pending } => {
            CalcState::OperandEntered {
                entry: EntryBuffer::start_digit(d),
                pending,
            }
        }
    }
}

fn point(state: CalcState) -> CalcState {
    match state {
        CalcState::Idle => CalcState::OperandEntered {
            entry: EntryBuffer::start_point(),
            pending: None,
        },
        CalcState::OperandEntered { mut entry, pending } => {
            entry.push_point();
            CalcState::OperandEntered { entry, pending }
        }
        CalcState::OperatorPending { pending, .. } => CalcState::OperandEntered {
            entry: EntryBuffer::start_point(),
            pending: Some(pending),
        },
        CalcState::ResultDisplayed { pending, .. } | CalcState::ErrorDisplayed { pending } => {
            CalcState::OperandEntered {
                entry: EntryBuffer::start_point(),
                pending,
            }
        }
    }
}

fn operator(state: CalcState, op: BinaryOp) -> (CalcState, Option<Evaluation>) {
    match state {
        CalcState::Idle => (operator_pending("0".to_string(), op), None),
        CalcState::OperandEntered {
            entry,
            pending: None,
        } => (operator_pending(entry.into_text(), op), None),
        // Chaining: the user is mid-entry of the second operand, so fold
        // the pending computation before arming the next one.
        CalcState::OperandEntered {
            entry,
            pending: Some(p),
        } => match fold(&p, entry.as_str()) {
            Ok((text, record)) => (operator_pending(text, op), Some(record)),
            // The chained computation failed; the freshly requested
            // operator is discarded rather than armed on the error marker.
            Err(state) => (state, None),
        },
        // Operator re-selected before the second operand was started:
        // replace the operator without evaluating. The shown text (which
        // backspace or a unary function may have edited) is captured.
        CalcState::OperatorPending { shown, .. } => (operator_pending(shown, op), None),
        CalcState::ResultDisplayed { text, .. } => (operator_pending(text, op), None),
        // The error marker is not an operand.
        err @ CalcState::ErrorDisplayed { .. } => (err, None),
    }
}

fn operator_pending(lhs: String, op: BinaryOp) -> CalcState {
    CalcState::OperatorPending {
        shown: lhs.clone(),
        pending: PendingOp { lhs, op },
    }
}

fn equals(state: CalcState) -> (CalcState, Option<Evaluation>) {
    match state {
        CalcState::OperandEntered {
            entry,
            pending: Some(p),
        } => match fold(&p, entry.as_str()) {
            Ok((text, record)) => (
                CalcState::ResultDisplayed {
                    text,
                    pending: None,
                },
                Some(record),
            ),
            Err(state) => (state, None),
        },
        // No pending operation, or the second operand has not been started
        // yet — evaluating would reuse a stale operand, so this is a no-op.
        other => (other, None),
    }
}

/// Evaluate a pending operation against the entered second operand.
/// On failure the machine lands on the error marker with nothing pending.
fn fold(p: &PendingOp, rhs_text: &str) -> Result<(String, Evaluation), CalcState> {
    let rhs = parse_display(rhs_text);
    match p.op.apply(p.lhs_value(), rhs) {
        Ok(v) => {
            let text = format_value(v);
            let expression = format!("{} {} {}", p.lhs, p.op.glyph(), rhs_text);
            debug!(%expression, result = %text, "evaluated");
            Ok((
                text.clone(),
                Evaluation {
                    expression,
                    result: text,
                },
            ))
        }
        Err(e) => {
            warn!(lhs = %p.lhs, op = %p.op.glyph(), rhs = %rhs_text, error = %e, "evaluation failed");
            Err(CalcState::ErrorDisplayed { pending: None })
        }
    }
}

fn backspace(state: CalcState) -> CalcState {
    match state {
        CalcState::Idle => CalcState::Idle,
        CalcState::OperandEntered { mut entry, pending } => {
            entry.backspace();
            CalcState::OperandEntered { entry, pending }
        }
        // Backspace edits the value line only; the captured operand and
        // operator are untouched.
        CalcState::OperatorPending { pending, shown } => CalcState::OperatorPending {
            pending,
            shown: pop_char(shown),
        },
        CalcState::ResultDisplayed { text, pending } => CalcState::ResultDisplayed {
            text: pop_char(text),
            pending,
        },
        // The error marker is not editable.
        err @ CalcState::ErrorDisplayed { .. } => err,
    }
}

fn pop_char(mut text: String) -> String {
    if text.len() > 1 {
        text.pop();
        text
    } else {
        "0".to_string()
    }
}

fn percent(state: CalcState) -> CalcState {
    match state {
        CalcState::Idle => CalcState::Idle,
        // Mid-entry the rewritten text stays an entry buffer, so further
        // digits append to it.
        CalcState::OperandEntered { entry, pending } => CalcState::OperandEntered {
            entry: EntryBuffer::from_text(format_value(entry.value() / 100.0)),
            pending,
        },
        CalcState::OperatorPending { pending, shown } => CalcState::OperatorPending {
            pending,
            shown: format_value(parse_display(&shown) / 100.0),
        },
        CalcState::ResultDisplayed { text, pending } => CalcState::ResultDisplayed {
            text: format_value(parse_display(&text) / 100.0),
            pending,
        },
        err @ CalcState::ErrorDisplayed { .. } => err,
    }
}

fn unary(state: CalcState, f: UnaryFn) -> (CalcState, Option<Evaluation>) {
    match state {
        CalcState::Idle => apply_unary(f, "0", None),
        CalcState::OperandEntered { entry, pending } => {
            apply_unary(f, &entry.into_text(), pending)
        }
        // Mid-expression: the function applies to the shown value and the
        // pending binary operation stays armed.
        CalcState::OperatorPending { pending, shown } => apply_unary(f, &shown, Some(pending)),
        CalcState::ResultDisplayed { text, pending } => apply_unary(f, &text, pending),
        err @ CalcState::ErrorDisplayed { .. } => (err, None),
    }
}

fn apply_unary(
    f: UnaryFn,
    operand: &str,
    pending: Option<PendingOp>,
) -> (CalcState, Option<Evaluation>) {
    match f.apply(parse_display(operand)) {
        Ok(v) => {
            let text = format_value(v);
            debug!(func = f.name(), %operand, result = %text, "applied function");
            let record = Evaluation {
                expression: format!("{}({})", f.name(), operand),
                result: text.clone(),
            };
            (CalcState::ResultDisplayed { text, pending }, Some(record))
        }
        Err(e) => {
            warn!(func = f.name(), %operand, error = %e, "function rejected operand");
            (CalcState::ErrorDisplayed { pending }, None)
        }
    }
}

/// Parse a display text back into a number. Display texts come from the
/// entry buffer or the formatter and always parse; the one exception is a
/// bare sign left over from backspacing a negative result, which falls
/// back to zero.
fn parse_display(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
