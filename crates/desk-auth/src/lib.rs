//! # desk-auth
//!
//! Session handling for contractdesk.
//!
//! Stores the explicit [`Session`] context (token, role, user id) in the OS
//! keychain (`keyring`) with env-var and file fallbacks, checks credentials
//! before any request is issued, and clears everything on logout.

pub mod error;
pub mod expiry;
pub mod session_store;

pub use desk_core::identity::Session;
pub use error::AuthError;
pub use expiry::{check_credential, decode_expiry};

/// Resolve the stored session, or the anonymous session when none exists.
///
/// Priority: keyring → env var → file. Does NOT check expiry (use
/// [`check_credential`] for that).
#[must_use]
pub fn resolve_session() -> Session {
    session_store::load().unwrap_or_else(Session::anonymous)
}

/// Persist a freshly issued session (after a successful login).
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the session cannot be stored anywhere.
pub fn sign_in(session: &Session) -> Result<(), AuthError> {
    if !session.has_token() {
        return Err(AuthError::NotAuthenticated);
    }
    session_store::store(session)
}

/// Clear the stored session wholesale.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the session file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    session_store::delete()
}
