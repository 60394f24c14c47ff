use clap::Subcommand;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in via browser.
    Login,
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}
