use forge_api::ThesisGateway;
use forge_core::Thesis;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;

/// What a list invocation should put on stdout.
#[derive(Debug, PartialEq, Eq)]
enum ListView {
    /// Human-readable empty state (table mode only; json/raw print `[]`).
    Empty,
    Rows(Vec<Thesis>),
}

pub async fn run(
    limit: Option<u32>,
    flags: &GlobalFlags,
    config: &forge_config::ForgeConfig,
) -> anyhow::Result<()> {
    let session = bootstrap::resolve_session(config).await?;
    let token = session
        .current_token()
        .ok_or(forge_auth::AuthError::NotAuthenticated)?;

    let gateway = ThesisGateway::new(config.api.thesis_base());
    let spinner = Progress::spinner("Loading theses...");
    let theses = gateway.list_mine(token).await?;
    spinner.finish();

    // Single fetch per invocation; an empty result is a terminal state, not
    // a reason to re-request.
    match narrow(theses, limit, flags, config.general.default_limit) {
        ListView::Empty => {
            println!("No theses yet. Submit your first with `thf thesis new`.");
            Ok(())
        }
        ListView::Rows(rows) => output(&rows, flags.format),
    }
}

/// Decide what to render: the table empty state, or the fetched rows cut to
/// the effective limit (subcommand flag, then global flag, then config).
fn narrow(
    mut theses: Vec<Thesis>,
    limit: Option<u32>,
    flags: &GlobalFlags,
    default_limit: u32,
) -> ListView {
    if theses.is_empty() && flags.format == OutputFormat::Table {
        return ListView::Empty;
    }

    let limit = limit.or(flags.limit).unwrap_or(default_limit);
    theses.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    ListView::Rows(theses)
}
