use std::fs;
use std::path::{Path, PathBuf};

use desk_core::identity::Session;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "contractdesk-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";

const TOKEN_ENV: &str = "DESK_AUTH__TOKEN";
const ROLE_ENV: &str = "DESK_AUTH__ROLE";
const USER_ID_ENV: &str = "DESK_AUTH__USER_ID";

/// Returns the keyring service name.
///
/// Defaults to `"contractdesk-cli"`. Override via `DESK_KEYRING_SERVICE` for
/// testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("DESK_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store the session in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if both keyring and file storage fail.
pub fn store(session: &Session) -> Result<(), AuthError> {
    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;

    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&json) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(&session_path()?, session)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(&session_path()?, session)
        }
    }
}

/// Load the session. Priority: keyring → `DESK_AUTH__TOKEN` env → file
/// (`~/.contractdesk/session.json`).
#[must_use]
pub fn load() -> Option<Session> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(json) = entry.get_password()
        && let Some(session) = parse_session(&json)
    {
        return Some(session);
    }

    // 2. Environment
    if let Some(session) = load_env() {
        return Some(session);
    }

    // 3. File fallback
    session_path().ok().and_then(|path| load_file(&path))
}

/// Delete the stored session from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the session file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // may not exist
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    delete_file(&session_path()?)
}

/// Which tier the current session came from (for status display).
#[must_use]
pub fn detect_session_source() -> Option<&'static str> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && entry
            .get_password()
            .is_ok_and(|json| parse_session(&json).is_some())
    {
        return Some("keyring");
    }
    if load_env().is_some() {
        return Some("env");
    }
    if session_path().ok().and_then(|path| load_file(&path)).is_some() {
        return Some("file");
    }
    None
}

// --- Private helpers ---

fn parse_session(json: &str) -> Option<Session> {
    serde_json::from_str::<Session>(json)
        .ok()
        .filter(Session::has_token)
}

fn load_env() -> Option<Session> {
    let token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty())?;
    Some(Session::new(
        token,
        std::env::var(ROLE_ENV).ok().filter(|r| !r.is_empty()),
        std::env::var(USER_ID_ENV).ok().filter(|u| !u.is_empty()),
    ))
}

fn session_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".contractdesk").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AuthError::SessionStoreError("home directory not found — cannot store session".into())
        })
}

fn store_file(path: &Path, session: &Session) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AuthError::SessionStoreError(format!("mkdir {}: {e}", parent.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    let json = serde_json::to_string_pretty(session)
        .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;
    fs::write(path, json)
        .map_err(|e| AuthError::SessionStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            AuthError::SessionStoreError(format!("chmod {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

fn load_file(path: &Path) -> Option<Session> {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| parse_session(&json))
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::SessionStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn admin_session() -> Session {
        Session::new("jwt.abc.123", Some("admin".into()), Some("u-1".into()))
    }

    #[test]
    fn session_path_is_under_home() {
        let path = session_path().expect("should resolve");
        assert!(path.ends_with(".contractdesk/session.json"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("session.json");

        store_file(&path, &admin_session()).expect("store");
        assert_eq!(load_file(&path), Some(admin_session()));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        delete_file(&path).expect("delete");
        assert!(!path.exists());
        // deleting twice is fine
        delete_file(&path).expect("delete again");
    }

    #[test]
    fn load_file_ignores_tokenless_sessions() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");

        std::fs::write(&path, r#"{"token":"  ","role":"admin"}"#).expect("write");
        assert!(load_file(&path).is_none());

        std::fs::write(&path, "not json").expect("write");
        assert!(load_file(&path).is_none());
    }
}
