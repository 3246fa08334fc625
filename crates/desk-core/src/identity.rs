use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Explicit session context: set on login, cleared on logout, read-only
/// everywhere else.
///
/// Produced by `desk-auth`, consumed by `desk-api` (bearer token) and
/// `desk-view` (role gate, pre-fetch credential check).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token. Empty means unauthenticated.
    #[serde(default)]
    pub token: String,
    /// Raw role string as issued by the server (e.g. `"admin"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "userId")]
    pub user_id: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, role: Option<String>, user_id: Option<String>) -> Self {
        Self {
            token: token.into(),
            role,
            user_id,
        }
    }

    /// The anonymous session (no token).
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Resolved role; missing or unknown roles are non-privileged.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_raw(self.role.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_has_no_token() {
        let session = Session::anonymous();
        assert!(!session.has_token());
        assert_eq!(session.role(), Role::User);
    }

    #[test]
    fn whitespace_token_is_not_a_token() {
        let session = Session::new("   ", Some("admin".into()), None);
        assert!(!session.has_token());
        assert_eq!(session.role(), Role::Admin);
    }

    #[test]
    fn deserializes_camel_case_user_id() {
        let session: Session =
            serde_json::from_str(r#"{"token":"t","role":"user","userId":"u1"}"#).unwrap();
        assert_eq!(session.user_id.as_deref(), Some("u1"));
    }
}
