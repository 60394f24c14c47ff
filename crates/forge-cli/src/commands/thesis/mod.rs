mod get;
mod list;
mod new;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThesisCommands;

/// Handle `thf thesis <subcommand>`.
pub async fn handle(
    action: &ThesisCommands,
    flags: &GlobalFlags,
    config: &forge_config::ForgeConfig,
) -> anyhow::Result<()> {
    bootstrap::require_api(config)?;

    match action {
        ThesisCommands::List { limit } => list::run(*limit, flags, config).await,
        ThesisCommands::Get { id } => get::run(id, flags, config).await,
        ThesisCommands::New(args) => new::run(args, flags, config).await,
    }
}
