use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;
use tokio::sync::mpsc;
use tracing::{info, warn};

use quickpick::app::command::Outcome;
use quickpick::app::config::{self, Config};
use quickpick::app::{r#loop::run_loop, state::AppState};
use quickpick::cli::Cli;
use quickpick::logging;

/// Exit status for a dismissed palette, as for an interrupted command.
const EXIT_CANCELLED: u8 = 130;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // An explicit --config must load; a broken default file only warns.
    let (mut config, config_error) = match config::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) if cli.config.is_none() => (Config::default(), Some(err)),
        Err(err) => return Err(err.into()),
    };
    cli.apply(&mut config);

    if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
        logging::init(&path, config.log_filter.as_deref())?;
    }
    if let Some(err) = config_error {
        warn!(error = %err, "falling back to default config");
    }

    // Candidates are read BEFORE terminal setup so a bad input file or an
    // interactive stdin never leaves the terminal in raw mode.
    let candidates = cli.load_candidates()?;
    let source = cli.source_name();
    info!(count = candidates.len(), %source, "candidates loaded");

    setup_panic_hook();

    let (action_tx, action_rx) = mpsc::channel(100);
    let app_state = AppState::new(&config, candidates, action_tx).with_source(source);

    // Setup terminal. stdout is kept free for the result.
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, action_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res? {
        Outcome::Selected(candidate) => {
            println!("{}", candidate.output());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::from(EXIT_CANCELLED)),
    }
}
