#![deny(unsafe_code)]

//! tally CLI — line-oriented calculator front end.

mod repl;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_config::AppConfig;
use tally_core::{Calculator, ERROR_DISPLAY, Input, Mode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// tally — a two-mode terminal calculator.
#[derive(Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "tally.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a key string (e.g. "12+34=") through a fresh engine and
    /// print the final value.
    Eval {
        /// Keys in the keyboard mapping: digits, '.', '+', '-', '*', '/',
        /// '=', '%'.
        keys: String,
    },

    /// Interactive line-oriented calculator.
    Repl,

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,

        /// Print the resolved configuration as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    // Set up tracing subscriber: the -v count overrides the configured
    // level. Logs go to stderr so that eval/repl output on stdout stays
    // clean.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Eval { keys } => cmd_eval(&config, &keys),
        Commands::Repl => repl::run(&config),
        Commands::Config { show, json } => cmd_config(&cli.config, show, json),
    }
}

fn cmd_eval(config: &AppConfig, keys: &str) -> Result<()> {
    let mut calc = new_engine(config);
    for c in keys.chars() {
        match Input::from_char(c) {
            Some(input) => calc.apply(input),
            None => anyhow::bail!("no key mapping for {c:?}"),
        }
    }

    println!("{}", calc.value());
    if calc.value() == ERROR_DISPLAY {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_config(config_path: &Path, show: bool, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else if show {
        let toml_str =
            toml::to_string_pretty(&config).map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        AppConfig::load(path).map_err(|e| anyhow::anyhow!(e))
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(AppConfig::default())
    }
}

/// Build an engine from the resolved configuration.
fn new_engine(config: &AppConfig) -> Calculator {
    let mut calc = Calculator::with_history_capacity(config.history.capacity);
    if config.ui.start_mode == "scientific" {
        calc.set_mode(Mode::Scientific);
    }
    calc
}
