//! History panel — scrollable tape of completed calculations.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tally_core::History;

/// Scrollable history viewer with auto-follow.
pub struct HistoryPanel {
    /// Scroll offset (0 = bottom/latest).
    scroll_offset: usize,
    /// Whether to stick to the bottom as new entries arrive.
    auto_follow: bool,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            auto_follow: true,
        }
    }

    pub fn scroll_up(&mut self, n: usize, total: usize) {
        self.scroll_offset = (self.scroll_offset + n).min(total.saturating_sub(1));
        self.auto_follow = false;
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
        if self.scroll_offset == 0 {
            self.auto_follow = true;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, history: &History) {
        let visible_height = area.height.saturating_sub(2) as usize; // minus borders

        if history.is_empty() {
            let empty = Paragraph::new("  (no calculations yet)")
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .title(" History (0) ")
                        .borders(Borders::ALL),
                );
            frame.render_widget(empty, area);
            return;
        }

        let total = history.len();
        let offset = self.scroll_offset.min(total.saturating_sub(1));
        let skip = total.saturating_sub(visible_height + offset);

        let items: Vec<ListItem> = history
            .entries()
            .iter()
            .skip(skip)
            .take(visible_height)
            .map(|entry| {
                let line = Line::from(vec![
                    Span::raw(entry.expression.clone()),
                    Span::styled(" = ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        entry.result.clone(),
                        Style::default().fg(Color::Green),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let follow_indicator = if self.auto_follow { " [follow]" } else { "" };
        let title = format!(" History ({total}){follow_indicator} ");

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(list, area);
    }
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tally_core::Evaluation;

    use super::*;

    fn tape(n: usize) -> History {
        let mut history = History::new(16);
        for i in 0..n {
            history.push(Evaluation {
                expression: format!("{i} + {i}"),
                result: format!("{}", i * 2),
            });
        }
        history
    }

    #[test]
    fn test_scroll_bounds() {
        let mut panel = HistoryPanel::new();
        let history = tape(5);

        panel.scroll_up(10, history.len());
        assert_eq!(panel.scroll_offset, 4);

        panel.scroll_down(2);
        assert_eq!(panel.scroll_offset, 2);
        assert!(!panel.auto_follow);

        panel.scroll_down(10);
        assert_eq!(panel.scroll_offset, 0);
        assert!(panel.auto_follow);
    }

    #[test]
    fn test_scroll_up_on_empty_tape() {
        let mut panel = HistoryPanel::new();
        panel.scroll_up(3, 0);
        assert_eq!(panel.scroll_offset, 0);
    }
}
