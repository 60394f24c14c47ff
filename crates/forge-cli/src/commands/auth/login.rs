use serde::Serialize;

use forge_api::UserGateway;
use forge_auth::{AuthError, Session, browser_flow};

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    email: String,
}

pub async fn handle(flags: &GlobalFlags, config: &forge_config::ForgeConfig) -> anyhow::Result<()> {
    if config.api.login_url.is_empty() {
        anyhow::bail!("auth login: FORGE_API__LOGIN_URL is not configured");
    }
    if config.api.user_url.is_empty() {
        anyhow::bail!("auth login: FORGE_API__USER_URL is not configured");
    }

    let client = reqwest::Client::new();
    let authorization_url =
        forge_api::login::fetch_authorization_url(&client, &config.api.login_url).await?;

    let user_gateway = UserGateway::with_client(client, &config.api.user_url);
    let spinner = Progress::spinner("Waiting for browser sign-in...");

    let (user, token) = browser_flow::login(
        &authorization_url,
        config.auth.callback_port,
        std::time::Duration::from_secs(config.auth.login_timeout_secs),
        move |token| async move {
            user_gateway
                .fetch_profile(&token)
                .await
                .map_err(|e| AuthError::ProfileResolution(e.to_string()))
        },
    )
    .await?;
    spinner.finish();

    let mut session = Session::new();
    let response = AuthLoginResponse {
        authenticated: true,
        user_id: user.id.clone(),
        name: user.full_name(),
        email: user.email.clone(),
    };
    forge_auth::commit_login(&mut session, user, token)?;

    output(&response, flags.format)
}
