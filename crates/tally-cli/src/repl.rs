//! The interactive line-oriented calculator loop.
//!
//! Each line is either a key sequence (decoded with the engine's keyboard
//! mapping) or a word command for what line input cannot express:
//! `sqrt` `square` `sin` `cos` `tan` `log` (scientific mode only), `del`,
//! `clear`, `mode basic|sci`, `history`, `quit`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tally_config::AppConfig;
use tally_core::{Calculator, Input, Mode, UnaryFn};

/// What a processed line asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    /// Keep reading; show the updated display.
    Continue,
    /// Print the history tape instead of the display.
    ShowHistory,
    /// A note for the user (unknown word, mode gate).
    Note(String),
    Quit,
}

pub(crate) fn run(config: &AppConfig) -> Result<()> {
    let mut calc = crate::new_engine(config);
    let stdin = io::stdin();
    let mut out = io::stdout();

    writeln!(
        out,
        "tally repl — keys 0-9 . + - * / = %  words: sqrt square sin cos tan log del clear mode history quit"
    )?;

    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(&mut calc, &line) {
            LineOutcome::Quit => break,
            LineOutcome::ShowHistory => {
                if calc.history().is_empty() {
                    writeln!(out, "(history is empty)")?;
                }
                for entry in calc.history().entries() {
                    writeln!(out, "{}", entry.line())?;
                }
            }
            LineOutcome::Note(note) => writeln!(out, "{note}")?,
            LineOutcome::Continue => {
                let expression = calc.expression();
                if !expression.is_empty() {
                    writeln!(out, "  {expression}")?;
                }
                writeln!(out, "= {}", calc.value())?;
            }
        }
    }
    Ok(())
}

/// Apply one input line to the engine.
fn handle_line(calc: &mut Calculator, line: &str) -> LineOutcome {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();

    match words.next() {
        None => return LineOutcome::Continue,
        Some("quit") | Some("exit") => return LineOutcome::Quit,
        Some("history") => return LineOutcome::ShowHistory,
        Some("clear") => {
            calc.clear();
            return LineOutcome::Continue;
        }
        Some("del") => {
            calc.backspace();
            return LineOutcome::Continue;
        }
        Some("mode") => {
            match words.next() {
                Some("basic") => calc.set_mode(Mode::Basic),
                Some("sci") | Some("scientific") => calc.set_mode(Mode::Scientific),
                other => {
                    return LineOutcome::Note(format!(
                        "usage: mode basic|sci (got {other:?})"
                    ));
                }
            }
            return LineOutcome::Continue;
        }
        Some(word) => {
            if let Some(f) = UnaryFn::from_name(word) {
                // Scientific functions are routed only in scientific mode.
                if calc.mode() == Mode::Basic {
                    return LineOutcome::Note(
                        "scientific functions need `mode sci`".to_string(),
                    );
                }
                calc.unary(f);
                return LineOutcome::Continue;
            }
        }
    }

    // A key sequence. Unrecognized keys are ignored.
    for c in trimmed.chars() {
        if let Some(input) = Input::from_char(c) {
            calc.apply(input);
        }
    }
    LineOutcome::Continue
}
