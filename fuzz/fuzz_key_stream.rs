//! Fuzz target for the calculator state machine.
//!
//! Run with: cargo +nightly fuzz run fuzz_key_stream
//!
//! Drives a single engine through an arbitrary key stream (unmapped keys
//! are dropped, as an input adapter would drop them) to find panics in the
//! transition function, the entry buffer, or value formatting.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tally_core::{Calculator, Input};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut calc = Calculator::new();
        for c in s.chars() {
            if let Some(input) = Input::from_char(c) {
                calc.apply(input);
            }
        }
        // Readouts must always be well-formed
        let _ = calc.value();
        let _ = calc.expression();
    }
});
