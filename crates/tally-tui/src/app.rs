//! TUI application state, action handling, and rendering.

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tally_config::AppConfig;
use tally_core::{Calculator, Input, Mode};

use crate::keymap::{self, Action};
use crate::panels::{self, HistoryPanel};

/// TUI application state.
pub struct App {
    /// The calculator engine; the app owns it and the bindings.
    pub engine: Calculator,

    /// History panel scroll state.
    pub history_panel: HistoryPanel,

    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new App from the resolved configuration.
    pub fn new(config: &AppConfig) -> Self {
        let mut engine = Calculator::with_history_capacity(config.history.capacity);
        if config.ui.start_mode == "scientific" {
            engine.set_mode(Mode::Scientific);
        }
        Self {
            engine,
            history_panel: HistoryPanel::new(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        self.handle_action(keymap::resolve(key));
    }

    /// Process a resolved action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleMode => {
                let mode = self.engine.mode().toggled();
                self.engine.set_mode(mode);
            }
            Action::HistoryUp => {
                let total = self.engine.history().len();
                self.history_panel.scroll_up(1, total);
            }
            Action::HistoryDown => self.history_panel.scroll_down(1),
            Action::Engine(input) => {
                // The scientific button group is hidden in basic mode, so
                // its keys are not routed there.
                if matches!(input, Input::Unary(_)) && self.engine.mode() == Mode::Basic {
                    return;
                }
                self.engine.apply(input);
            }
            Action::None => {}
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // display
                Constraint::Min(1),    // keypad + history
                Constraint::Length(3), // status bar
            ])
            .split(frame.area());

        panels::display::render(frame, chunks[0], &self.engine);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(20)])
            .split(chunks[1]);

        panels::keypad::render(frame, main[0], self.engine.mode());
        self.history_panel
            .render(frame, main[1], self.engine.history());

        let status = Paragraph::new(self.status_line())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(status, chunks[2]);
    }

    /// Get the status line text.
    pub fn status_line(&self) -> String {
        format!(
            " q:quit  m:mode  Esc:clear  ⌫:delete  ↵/=:evaluate  ↑/↓:history  [{mode}]",
            mode = self.engine.mode().label()
        )
    }
}
