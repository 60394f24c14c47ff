use anyhow::Context;
use forge_api::UserGateway;
use forge_auth::Session;
use forge_config::ForgeConfig;

/// Load layered configuration (including `.env`).
pub fn load_config() -> anyhow::Result<ForgeConfig> {
    ForgeConfig::load_with_dotenv().context("failed to load configuration")
}

/// Ensure the backend endpoints needed by thesis commands are configured.
pub fn require_api(config: &ForgeConfig) -> anyhow::Result<()> {
    if !config.api.is_configured() {
        anyhow::bail!(
            "backend endpoints are not configured - set FORGE_API__THESIS_URL and \
             FORGE_API__USER_URL (or add them to .forge/config.toml)"
        );
    }
    Ok(())
}

/// Rebuild the session at process start: load the stored token and re-resolve
/// the profile from it. The user object is never persisted, only the token.
pub async fn resolve_session(config: &ForgeConfig) -> anyhow::Result<Session> {
    let token = forge_auth::resolve_token().ok_or(forge_auth::AuthError::NotAuthenticated)?;
    tracing::debug!("resolving stored token to a profile");

    let gateway = UserGateway::new(&config.api.user_url);
    let user = gateway
        .fetch_profile(&token)
        .await
        .context("stored token could not be resolved to a profile")?;

    Ok(Session::resumed(user, token))
}
