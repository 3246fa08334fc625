//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401 → [`ApiError::Unauthorized`],
//! non-success → [`ApiError::Api`]) and the `{ success, message, <key> }`
//! envelope so the resource modules stay focused on request construction.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ApiError::Unauthorized`].
/// - **Non-success status** → [`ApiError::Api`] with the body's `message`
///   field when it has one, otherwise the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: server_message(&body).unwrap_or(body),
        });
    }
    Ok(resp)
}

/// Read a checked response as a JSON envelope.
///
/// A body with `"success": false` becomes [`ApiError::Rejected`]. An empty
/// body reads as `null`.
pub async fn read_envelope(resp: reqwest::Response) -> Result<Value, ApiError> {
    let text = resp.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let body: Value =
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(format!("invalid JSON: {e}")))?;
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request was rejected")
            .to_string();
        return Err(ApiError::Rejected { message });
    }
    Ok(body)
}

/// Pull a single payload out of an envelope: `body[key]` when present,
/// otherwise the body itself when it is a bare record rather than an
/// envelope (some endpoints answer with the record alone).
///
/// An envelope (a body carrying `success`) without `key` is never decoded as
/// the record.
pub fn extract_one<T: DeserializeOwned>(body: Value, key: &str) -> Result<T, ApiError> {
    extract_echo(body, key)?.ok_or_else(|| ApiError::Parse(format!("response has no '{key}'")))
}

/// Like [`extract_one`], but a confirmation that carries no record (an
/// envelope without `key`, or an empty body) is `Ok(None)`.
///
/// Mutation endpoints answer this way when they do not echo what they saved.
pub fn extract_echo<T: DeserializeOwned>(body: Value, key: &str) -> Result<Option<T>, ApiError> {
    let payload = match body {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        Value::Object(map) if map.contains_key("success") => Value::Null,
        other => other,
    };
    if payload.is_null() {
        return Ok(None);
    }
    serde_json::from_value(payload)
        .map(Some)
        .map_err(|e| ApiError::Parse(format!("{key}: {e}")))
}

/// Pull a list out of an envelope (`body[key]`, or a bare array).
///
/// Items that cannot be decoded are logged and skipped so one bad row never
/// blanks the whole list.
pub fn extract_list<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>, ApiError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(ApiError::Parse(format!("'{key}' is not an array"))),
        },
        Value::Null => Vec::new(),
        _ => return Err(ApiError::Parse(format!("expected '{key}' list"))),
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(key, index, %error, "skipping undecodable list item");
                None
            }
        })
        .collect())
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
