//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    io::{self, Stdout},
    path::PathBuf,
};
use tictactoe_tui::{init_logging, ui, Action, App, TuiConfig};
use tracing::{error, info, instrument};

/// Play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    init_logging(&config)?;

    info!(?config, "Starting tic-tac-toe");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.title().as_str());
    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, waits for one event, applies it; repeats until the user quits.
#[instrument(skip_all)]
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == Action::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}
