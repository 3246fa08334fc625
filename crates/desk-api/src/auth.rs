//! Login and registration.
//!
//! These are the only unauthenticated calls. A successful login yields the
//! [`Session`] the caller hands to `desk_auth::sign_in`.

use desk_core::drafts::{LoginRequest, RegisterRequest};
use desk_core::identity::Session;
use serde_json::Value;

use crate::http::{check_response, read_envelope};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for blank credentials,
    /// [`ApiError::Unauthorized`] or [`ApiError::Rejected`] for bad ones, and
    /// [`ApiError::Parse`] when the response carries no token.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        request.validate()?;
        let url = self.url("auth/login");
        tracing::debug!(%url, username = %request.username.trim(), "login request");
        let resp = self.http.post(url).json(request).send().await?;
        let body = read_envelope(check_response(resp).await?).await?;
        session_from_login(&body)
    }

    /// Register a new account. Returns the server's message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for a failing form, otherwise as
    /// [`ApiClient::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        request.validate()?;
        let url = self.url("auth/register");
        tracing::debug!(%url, "register request");
        let resp = self.http.post(url).json(request).send().await?;
        let body = read_envelope(check_response(resp).await?).await?;
        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("registered")
            .to_string())
    }
}

/// Build a session from a login response.
///
/// Accepts `role`/`userId` at the top level or nested under `user`.
pub(crate) fn session_from_login(body: &Value) -> Result<Session, ApiError> {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Parse("login response has no token".into()))?;

    let user = body.get("user");
    let role = body
        .get("role")
        .or_else(|| user.and_then(|u| u.get("role")))
        .and_then(text);
    let user_id = ["userId", "user_id"]
        .iter()
        .find_map(|key| body.get(*key))
        .or_else(|| user.and_then(|u| u.get("_id").or_else(|| u.get("id"))))
        .and_then(text);

    Ok(Session::new(token, role, user_id))
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
