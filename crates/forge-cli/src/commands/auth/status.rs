use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

impl AuthStatusResponse {
    fn unauthenticated(note: String) -> Self {
        Self {
            authenticated: false,
            user_id: None,
            name: None,
            email: None,
            token_source: None,
            note: Some(note),
        }
    }
}

pub async fn handle(flags: &GlobalFlags, config: &forge_config::ForgeConfig) -> anyhow::Result<()> {
    let status = if config.api.user_url.is_empty() {
        AuthStatusResponse::unauthenticated("FORGE_API__USER_URL not configured".into())
    } else if forge_auth::resolve_token().is_none() {
        AuthStatusResponse::unauthenticated("no stored token found".into())
    } else {
        match bootstrap::resolve_session(config).await {
            Ok(session) => {
                let user = session.current_user().cloned();
                AuthStatusResponse {
                    authenticated: session.is_authenticated(),
                    user_id: user.as_ref().map(|u| u.id.clone()),
                    name: user.as_ref().map(forge_core::User::full_name),
                    email: user.map(|u| u.email),
                    token_source: forge_auth::TokenStore::from_env()
                        .ok()
                        .and_then(|store| store.detect_source()),
                    note: None,
                }
            }
            Err(error) => AuthStatusResponse::unauthenticated(format!("{error:#}")),
        }
    };

    output(&status, flags.format)
}
