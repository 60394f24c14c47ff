use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated - run `thf auth login`")]
    NotAuthenticated,

    #[error("browser login failed: {0}")]
    BrowserFlowFailed(String),

    #[error("provider callback carried no token")]
    CallbackMissingToken,

    #[error("could not resolve user profile: {0}")]
    ProfileResolution(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
