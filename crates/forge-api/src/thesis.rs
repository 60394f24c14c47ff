//! Remote thesis gateway.

use forge_core::{Thesis, ThesisDraft};

use crate::error::{ApiError, check_get_status};
use crate::wire::{ThesisPayload, ThesisRecord};

/// Typed access to the thesis resource.
///
/// Every operation requires a bearer token; the gateway holds no session
/// state and no cache.
#[derive(Debug, Clone)]
pub struct ThesisGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ThesisGateway {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the theses owned by the token bearer, in server order.
    ///
    /// # Errors
    ///
    /// `Auth` on 401, `Network` on transport failure, `Decode` if the body
    /// does not parse as a thesis list.
    pub async fn list_mine(&self, token: &str) -> Result<Vec<Thesis>, ApiError> {
        let url = format!("{}/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;

        let records = check_get_status(response, "thesis list")?
            .json::<Vec<ThesisRecord>>()
            .await
            .map_err(|e| ApiError::decode(&e))?;

        Ok(records.into_iter().map(Thesis::from).collect())
    }

    /// Fetch a single thesis by identifier.
    ///
    /// # Errors
    ///
    /// `NotFound` on 404, otherwise as [`Self::list_mine`].
    pub async fn get(&self, id: &str, token: &str) -> Result<Thesis, ApiError> {
        let url = format!("{}/{id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;

        let record = check_get_status(response, &format!("thesis {id}"))?
            .json::<ThesisRecord>()
            .await
            .map_err(|e| ApiError::decode(&e))?;

        Ok(Thesis::from(record))
    }

    /// Create a thesis; the server assigns the identifier.
    ///
    /// A 2xx response whose body lacks a non-empty identifier is a rejected
    /// submission as far as this gateway is concerned and raises
    /// `Validation`, the same as an explicit non-2xx.
    ///
    /// # Errors
    ///
    /// `Auth` on 401, `Validation` with the server payload on any other
    /// non-2xx (and on a missing identifier), `Network`/`Decode` as usual.
    pub async fn create(
        &self,
        draft: &ThesisDraft,
        token: &str,
        owner_id: &str,
    ) -> Result<Thesis, ApiError> {
        let url = format!("{}/", self.base_url);
        let payload = ThesisPayload::from_draft(draft, owner_id);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth);
        }
        if !status.is_success() {
            let detail = rejection_detail(response).await;
            tracing::warn!(status = status.as_u16(), %detail, "create rejected by server");
            return Err(ApiError::Validation {
                status: status.as_u16(),
                detail,
            });
        }

        let record = response
            .json::<ThesisRecord>()
            .await
            .map_err(|e| ApiError::decode(&e))?;

        if record.id.trim().is_empty() {
            return Err(ApiError::Validation {
                status: status.as_u16(),
                detail: serde_json::Value::String(
                    "create response carried no identifier".to_string(),
                ),
            });
        }

        Ok(Thesis::from(record))
    }
}

/// Best-effort extraction of the server's error payload.
async fn rejection_detail(response: reqwest::Response) -> serde_json::Value {
    match response.text().await {
        Ok(body) => serde_json::from_str(&body)
            .unwrap_or_else(|_| serde_json::Value::String(body)),
        Err(error) => serde_json::Value::String(format!("unreadable error body: {error}")),
    }
}
