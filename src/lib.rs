//! glt - Git Log Touch-up
//!
//! A terminal user interface for picking a commit and editing its author and
//! committer: names, emails and timestamps.

pub mod app;
pub mod error;
pub mod git;
pub mod input;
pub mod logging;
pub mod state;
pub mod ui;

pub use app::{edit_commit, pick_commit, run_session, show_result, EditOutcome, SessionOutcome};
pub use error::{GltError, Result};
pub use git::Repository;
pub use input::{KeySource, ScriptedKeys, TerminalKeys};
pub use ui::Screen;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::panic;
use std::path::PathBuf;
use tracing::{error, info};

/// Command-line arguments for glt.
#[derive(Parser, Debug)]
#[command(name = "glt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the git repository (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Maximum number of commits to load
    #[arg(short = 'n', long, default_value = "50")]
    limit: usize,

    /// Edit and report without rewriting history
    #[arg(long)]
    dry_run: bool,

    /// Write diagnostics to this file (filter with GLT_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Main entry point for the glt application.
pub fn main() {
    // Set up panic hook to restore terminal on panic
    setup_panic_hook();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!(error = %e, "glt failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    logging::init(args.log_file.as_deref())?;

    let repo = match &args.path {
        Some(path) => Repository::open(path)?,
        None => Repository::open_current_dir()?,
    };
    let commits = repo.load_commits(args.limit)?;
    info!(count = commits.len(), dry_run = args.dry_run, "starting session");

    let mut screen = Screen::from_terminal(setup_terminal()?);
    let result = run_session(&mut screen, &mut TerminalKeys, &repo, &commits, args.dry_run);

    // Restore terminal even if the session failed
    let mut terminal = screen.into_terminal();
    restore_terminal(&mut terminal)?;

    match result? {
        Some(outcome) => info!(
            changed = %outcome.description,
            rewritten = ?outcome.rewritten.map(|id| id.hex()),
            "session finished"
        ),
        None => info!("session cancelled"),
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| GltError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| GltError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| GltError::Terminal(e.to_string()))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().map_err(|e| GltError::Terminal(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| GltError::Terminal(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| GltError::Terminal(e.to_string()))?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal first
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);

        // Then call original hook to print panic info
        original_hook(panic_info);
    }));
}
