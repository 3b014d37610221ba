#![deny(unsafe_code)]

//! tally TUI — full-screen calculator.

mod app;
mod keymap;
mod panels;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

fn main() -> Result<()> {
    // Load config (best-effort)
    let config_path = PathBuf::from("tally.toml");
    let config = if config_path.exists() {
        tally_config::AppConfig::load(&config_path)
            .unwrap_or_else(|_| tally_config::AppConfig::default())
    } else {
        tally_config::AppConfig::default()
    };

    info!("Starting tally TUI");

    // Set up terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = app::App::new(&config);
    let tick = Duration::from_millis(config.ui.tick_rate_ms);

    // Main event loop
    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
