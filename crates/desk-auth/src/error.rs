use thiserror::Error;

/// Credential problems. Every variant means "send the user to the login view";
/// none of them is rendered as an in-page error.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `desk auth login`")]
    NotAuthenticated,

    #[error("session expired — run `desk auth login` to sign in again")]
    TokenExpired,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("session store error: {0}")]
    SessionStoreError(String),

    #[error("{0}")]
    Other(String),
}
