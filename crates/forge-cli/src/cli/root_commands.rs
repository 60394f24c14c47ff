use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ThesisCommands};

/// All top-level commands for `thf`.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication (browser login, logout, status).
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Thesis proposals (list, get, new).
    Thesis {
        #[command(subcommand)]
        action: ThesisCommands,
    },
}
