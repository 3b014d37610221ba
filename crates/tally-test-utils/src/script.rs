//! Key-script driver for engine tests.
//!
//! Scripts use the keyboard mapping from [`Input::from_char`]: digits, `.`,
//! `+ - * /`, `=`, and `%`. A whole session reads like the keys the user
//! pressed, e.g. `"2+3*4="`.

use tally_core::{Calculator, Input};

/// Feed every key of `keys` into the engine. Panics on a key with no
/// engine mapping so that typos in test scripts surface immediately.
pub fn press_keys(calc: &mut Calculator, keys: &str) {
    for c in keys.chars() {
        match Input::from_char(c) {
            Some(input) => calc.apply(input),
            None => panic!("script contains a key with no engine mapping: {c:?}"),
        }
    }
}

/// Run a fresh engine over the script and return the final value text.
pub fn run_script(keys: &str) -> String {
    let mut calc = Calculator::new();
    press_keys(&mut calc, keys);
    calc.value().to_string()
}
