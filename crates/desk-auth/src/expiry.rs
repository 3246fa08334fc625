use base64::Engine as _;
use chrono::{DateTime, Utc};
use desk_core::identity::Session;

use crate::error::AuthError;

/// Decode the JWT `exp` claim without verifying the signature.
///
/// This is a best-effort, client-side check; the server stays the authority
/// and answers 401 for anything it rejects.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// Check that `session` carries a credential worth sending.
///
/// Opaque (non-JWT) tokens and JWTs without `exp` pass; the server decides.
///
/// # Errors
///
/// - `AuthError::NotAuthenticated` when there is no token.
/// - `AuthError::TokenExpired` when the token is a JWT whose `exp` is at or before `now`.
pub fn check_credential(session: &Session, now: DateTime<Utc>) -> Result<(), AuthError> {
    if !session.has_token() {
        return Err(AuthError::NotAuthenticated);
    }
    match decode_expiry(session.token.trim()) {
        Ok(expires_at) if expires_at <= now => {
            tracing::debug!(%expires_at, "stored token is expired");
            Err(AuthError::TokenExpired)
        }
        Ok(_) | Err(_) => Ok(()),
    }
}
