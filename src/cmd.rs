//! Top-level command handlers.
//!
//! The UI command owns the terminal lifecycle: raw mode and the alternate
//! screen are entered before the event loop starts and restored before
//! control returns to the shell, including on error.

use std::io;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::project::sample_projects;
use crate::tui::app::App;

/// Subcommands accepted on the command line.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the interactive two-pane viewer.
pub fn cmd_ui() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(sample_projects());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Print a completion script for the given shell to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
