use chrono::Utc;
use desk_auth::Session;
use desk_view::{Capabilities, landing_route};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    role: Option<String>,
    user_id: Option<String>,
    capabilities: Option<Capabilities>,
    landing: Option<String>,
    expires_at: Option<String>,
    source: Option<&'static str>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = desk_auth::resolve_session();
    let status = describe(&session, desk_auth::session_store::detect_session_source());
    output(&status, flags.format)
}

fn describe(session: &Session, source: Option<&'static str>) -> AuthStatusResponse {
    let expires_at = desk_auth::decode_expiry(&session.token)
        .ok()
        .map(|at| at.to_rfc3339());

    match desk_auth::check_credential(session, Utc::now()) {
        Ok(()) => AuthStatusResponse {
            authenticated: true,
            role: session.role.clone(),
            user_id: session.user_id.clone(),
            capabilities: Some(Capabilities::for_session(session)),
            landing: Some(landing_route(session.role()).path()),
            expires_at,
            source,
            note: None,
        },
        Err(error) => AuthStatusResponse {
            authenticated: false,
            role: None,
            user_id: None,
            capabilities: None,
            landing: None,
            expires_at,
            source,
            note: Some(error.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_is_unauthenticated() {
        let status = describe(&Session::anonymous(), None);
        assert!(!status.authenticated);
        assert!(status.note.is_some());
        assert!(status.landing.is_none());
    }

    #[test]
    fn opaque_admin_token_lands_on_dashboard() {
        let session = Session::new("opaque-token", Some("admin".into()), Some("u-1".into()));
        let status = describe(&session, Some("file"));
        assert!(status.authenticated);
        assert_eq!(status.landing.as_deref(), Some("/admin-dashboard"));
        assert!(status.expires_at.is_none());
        assert!(status.capabilities.is_some_and(|c| c.can_delete));
    }
}
