//! Display panel — the pending-expression line and the value line.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tally_core::{Calculator, ERROR_DISPLAY};

pub fn render(frame: &mut Frame, area: Rect, engine: &Calculator) {
    let value_style = if engine.value() == ERROR_DISPLAY {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            engine.expression(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(engine.value().to_string(), value_style)),
    ];

    let title = format!(" tally [{}] ", engine.mode().label());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
