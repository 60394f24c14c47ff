use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for gateway calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or connectivity failure, or a status outside the mapped set.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the bearer token (401).
    #[error("authentication rejected by server - run `thf auth login`")]
    Auth,

    /// The requested resource does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The server rejected a submission; carries the server's error payload.
    #[error("server rejected the submission ({status}): {detail}")]
    Validation {
        status: u16,
        detail: serde_json::Value,
    },

    /// The response body does not match the expected shape.
    #[error("could not decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn network(error: &reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }

    pub(crate) fn decode(error: &reqwest::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Map a response's status onto the error taxonomy shared by every GET
/// gateway call: 401 → `Auth`, 404 → `NotFound`, any other non-2xx →
/// `Network`. Create has its own mapping (`Validation`).
pub(crate) fn check_get_status(
    response: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Auth);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resource.to_string()));
    }
    if !status.is_success() {
        return Err(ApiError::Network(format!(
            "server returned {status} for {resource}"
        )));
    }
    Ok(response)
}
