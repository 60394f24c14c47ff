use std::time::Duration;

use forge_core::User;

use crate::error::AuthError;
use crate::redirect::{RedirectHandler, RedirectState};

/// Execute the browser-based provider login flow.
///
/// 1. Start `tiny_http` on `127.0.0.1` (random port unless `callback_port`
///    is fixed)
/// 2. Open the browser to the provider authorization URL with `redirect_uri`
///    pointing at the local callback
/// 3. Wait for the callback carrying a `token` query parameter (in
///    `spawn_blocking`, since `tiny_http::recv` blocks)
/// 4. Resolve the token bearer's profile via `resolve_profile`
///
/// The caller commits the returned `(user, token)` pair into the session;
/// on any failure path the session has not been touched.
///
/// # Errors
///
/// Returns `AuthError::BrowserFlowFailed` if the server cannot bind or the
/// callback times out, `AuthError::CallbackMissingToken` if the provider
/// redirected without a token, and `AuthError::ProfileResolution` if the
/// profile fetch fails.
pub async fn login<F, Fut>(
    authorization_url: &str,
    callback_port: u16,
    timeout: Duration,
    resolve_profile: F,
) -> Result<(User, String), AuthError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<User, AuthError>>,
{
    let server = tiny_http::Server::http(("127.0.0.1", callback_port))
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;

    let redirect_uri = format!("http://127.0.0.1:{port}/callback");
    let separator = if authorization_url.contains('?') {
        '&'
    } else {
        '?'
    };
    let sign_in_url = format!(
        "{authorization_url}{separator}redirect_uri={}",
        urlencoding::encode(&redirect_uri)
    );

    eprintln!("Opening browser to: {sign_in_url}");
    if let Err(error) = open::that(&sign_in_url) {
        eprintln!("Failed to open browser: {error}");
        eprintln!("Open the URL above manually, then return here.");
    }

    // Wait for the callback in spawn_blocking; it hands back the handler in
    // ResolvingUser state along with the extracted token.
    let (mut handler, token) =
        tokio::task::spawn_blocking(move || wait_for_callback(server, timeout))
            .await
            .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))??;

    match resolve_profile(token.clone()).await {
        Ok(user) => {
            handler.commit();
            Ok((user, token))
        }
        Err(error) => {
            handler.fail(error.to_string());
            if let RedirectState::Failed { reason } = handler.state() {
                tracing::error!(%reason, "login redirect failed; session left untouched");
            }
            Err(error)
        }
    }
}

/// Block until the callback server receives a request carrying a token.
///
/// Loops on `recv_timeout()`, answering requests that aren't the callback
/// (favicon, preflight, stray refreshes) with 204 so they don't cause a
/// false failure. Callback observations go through the [`RedirectHandler`],
/// which de-duplicates on the token value.
fn wait_for_callback(
    server: tiny_http::Server,
    timeout: Duration,
) -> Result<(RedirectHandler, String), AuthError> {
    let mut handler = RedirectHandler::new();
    let deadline = std::time::Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if remaining.is_zero() {
            return Err(AuthError::BrowserFlowFailed(format!(
                "browser callback timed out after {}s",
                timeout.as_secs()
            )));
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(req)) => req,
            Ok(None) => {
                return Err(AuthError::BrowserFlowFailed(format!(
                    "browser callback timed out after {}s",
                    timeout.as_secs()
                )));
            }
            Err(e) => {
                return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}")));
            }
        };

        let url = request.url().to_string();

        if !url.starts_with("/callback") {
            let response = tiny_http::Response::from_string("").with_status_code(204);
            let _ = request.respond(response);
            continue;
        }

        let query = url.split_once('?').map_or("", |(_, query)| query);

        match handler.observe_query(query) {
            Some(token) => {
                let response = tiny_http::Response::from_string(
                    "<html><body><h1>Signed in</h1><p>You can close this tab and return to the terminal.</p></body></html>",
                );
                let _ = request.respond(with_html_content_type(response));
                return Ok((handler, token));
            }
            None => {
                let response = tiny_http::Response::from_string(
                    "<html><body><h1>Sign-in failed</h1><p>No token in callback. Check the CLI output.</p></body></html>",
                );
                let _ = request.respond(with_html_content_type(response));
                return Err(AuthError::CallbackMissingToken);
            }
        }
    }
}

fn with_html_content_type(
    response: tiny_http::Response<std::io::Cursor<Vec<u8>>>,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    match tiny_http::Header::from_bytes("Content-Type", "text/html") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
