//! Identity-provider login endpoint.

use crate::error::{ApiError, check_get_status};

/// Fetch the provider authorization URL from the backend.
///
/// The backend returns the URL as a JSON string; the browser flow opens it
/// with the local callback appended.
///
/// # Errors
///
/// `Network` on transport failure, `Decode` if the body is not a JSON
/// string.
pub async fn fetch_authorization_url(
    client: &reqwest::Client,
    login_url: &str,
) -> Result<String, ApiError> {
    let response = client
        .get(login_url)
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;

    check_get_status(response, "authorization url")?
        .json::<String>()
        .await
        .map_err(|e| ApiError::decode(&e))
}
