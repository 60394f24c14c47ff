//! Remote user gateway.

use forge_core::User;

use crate::error::{ApiError, check_get_status};
use crate::wire::UserRecord;

/// Fetches the profile of a bearer token's owner. No local caching.
#[derive(Debug, Clone)]
pub struct UserGateway {
    client: reqwest::Client,
    user_url: String,
}

impl UserGateway {
    #[must_use]
    pub fn new(user_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), user_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, user_url: &str) -> Self {
        Self {
            client,
            user_url: user_url.to_string(),
        }
    }

    /// Fetch the profile identified by `token`.
    ///
    /// # Errors
    ///
    /// `Auth` on 401, `Network` on transport failure, `Decode` if the body
    /// does not parse as a profile.
    pub async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .client
            .get(&self.user_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;

        let record = check_get_status(response, "user profile")?
            .json::<UserRecord>()
            .await
            .map_err(|e| ApiError::decode(&e))?;

        Ok(User::from(record))
    }
}
