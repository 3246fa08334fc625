//! # desk-api
//!
//! Authenticated REST client for the contracts/meetings backend.
//!
//! Every call takes the explicit [`Session`](desk_core::identity::Session)
//! and sends its token as a bearer credential. Responses use the
//! `{ success, message, <payload> }` envelope; see [`http`] for how it is
//! unwrapped.
//!
//! Endpoints (relative to `api.base_url`):
//! - `POST /auth/login`, `POST /auth/register`
//! - `GET /contracts/allcontract`, `GET|PUT|DELETE /contracts/{id}`, `POST /contracts/create`
//! - `GET /meetings`, `PUT|DELETE /meetings/{id}`, `POST /meetings/create`

pub mod auth;
pub mod contracts;
pub mod meetings;

mod error;
pub mod http;

pub use error::ApiError;

use std::time::Duration;

use desk_config::api::ApiConfig;
use desk_core::identity::Session;

/// HTTP client for the contracts/meetings API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request carrying the session's bearer token.
    fn authorized(
        &self,
        method: reqwest::Method,
        path: &str,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        self.http
            .request(method, url)
            .bearer_auth(session.token.trim())
    }
}

/// Percent-encode a record id for use as a path segment.
fn segment(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "https://cms.example.com/api/".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://cms.example.com/api");
        assert_eq!(
            client.url("/contracts/allcontract"),
            "https://cms.example.com/api/contracts/allcontract"
        );
        assert_eq!(client.url("meetings"), "https://cms.example.com/api/meetings");
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment(" a/b c "), "a%2Fb%20c");
    }
}
