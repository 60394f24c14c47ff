mod login;
mod logout;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `thf auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &forge_config::ForgeConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login => login::handle(flags, config).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags, config).await,
    }
}
