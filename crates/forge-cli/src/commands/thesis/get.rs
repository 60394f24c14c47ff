use forge_api::ThesisGateway;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(
    id: &str,
    flags: &GlobalFlags,
    config: &forge_config::ForgeConfig,
) -> anyhow::Result<()> {
    let session = bootstrap::resolve_session(config).await?;
    let token = session
        .current_token()
        .ok_or(forge_auth::AuthError::NotAuthenticated)?;

    let gateway = ThesisGateway::new(config.api.thesis_base());
    let thesis = gateway.get(id, token).await?;

    output(&thesis, flags.format)
}
