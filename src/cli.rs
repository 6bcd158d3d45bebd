use clap::Parser;

use crate::cmd::Commands;

/// Minimal two-pane task viewer.
/// Running without a subcommand launches the interactive UI.
#[derive(Parser)]
#[command(name = "td", version, about = "Two-pane terminal task viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}
