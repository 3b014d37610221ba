//! Keypad panel — the button grid for the active mode.
//!
//! The grid is a legend: each cell names a key that the keymap routes to
//! the engine. Scientific mode adds the function rows; basic mode hides
//! them, and the keymap ignores their keys accordingly.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tally_core::Mode;

const BASIC_ROWS: [[&str; 4]; 5] = [
    ["Esc C", "⌫", "%", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "=", "↵"],
];

const SCIENTIFIC_ROWS: [[&str; 4]; 2] = [
    ["r √", "x x²", "s sin", "c cos"],
    ["t tan", "l log", "", ""],
];

pub fn render(frame: &mut Frame, area: Rect, mode: Mode) {
    let mut lines: Vec<Line> = Vec::new();

    if mode == Mode::Scientific {
        for row in SCIENTIFIC_ROWS {
            lines.push(row_line(row, Color::Magenta));
            lines.push(Line::default());
        }
    }
    for row in BASIC_ROWS {
        lines.push(row_line(row, Color::Cyan));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keypad ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn row_line(row: [&str; 4], accent: Color) -> Line<'static> {
    let spans: Vec<Span> = row
        .iter()
        .map(|label| {
            if label.is_empty() {
                Span::raw("        ")
            } else {
                let style = if label.len() == 1 && label.chars().all(|c| c.is_ascii_digit()) {
                    Style::default()
                } else {
                    Style::default().fg(accent)
                };
                Span::styled(format!("[{label:^6}]"), style)
            }
        })
        .collect();
    Line::from(spans)
}
