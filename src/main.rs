//! # Taskdeck
//!
//! A minimal two-pane terminal task viewer with vim-style navigation.
//!
//! The screen is split into a project list on the left and the selected
//! project's tasks on the right, with a help line along the bottom. Focus
//! moves between the panes with `h`/`l` (or ←/→), the cursor moves with
//! `j`/`k` (or ↓/↑), and Enter/Space toggles the task under the cursor.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the viewer
//! td
//!
//! # Generate shell completions
//! td completions bash
//! ```
//!
//! The data set is a hardcoded sample: nothing is read from or written to
//! disk, and all changes are lost on exit. The `a` (New) binding is shown
//! in the help line but has no creation flow.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod project;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod keymap;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        None => {
            if let Err(err) = cmd_ui() {
                eprintln!("Error running UI: {}", err);
                std::process::exit(1);
            }
        }
    }
}
