#![deny(unsafe_code)]

//! tally core — the calculator engine.
//!
//! Owns the running-calculation state machine: digit accumulation, pending
//! binary operations, evaluation, and the scientific unary functions. The
//! engine has no presentation dependencies; the CLI and TUI crates construct
//! a [`Calculator`], route decoded inputs into it, and read back the two
//! display strings (current value and pending-expression text) after every
//! call.

/// The [`Calculator`] wrapper — state machine plus mode and history tape.
pub mod engine;
/// Textual buffer for a number mid-entry.
pub mod entry;
/// Bounded in-memory tape of completed calculations.
pub mod history;
/// Binary operators, unary functions, domain errors, and value formatting.
pub mod op;
/// The tagged calculation state and its transition function.
pub mod state;

pub use engine::{Calculator, Mode};
pub use entry::EntryBuffer;
pub use history::{Evaluation, History};
pub use op::{BinaryOp, DomainError, ERROR_DISPLAY, UnaryFn, format_value};
pub use state::{CalcState, Input, PendingOp};
