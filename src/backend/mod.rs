//! Client for the hosted table store.
//!
//! The backend is an external collaborator reached over HTTPS: a
//! PostgREST-style per-table CRUD surface plus a GoTrue-style auth
//! surface. This module owns the configured handle; `table` builds the
//! generic row operations and `auth` speaks the session protocol.

mod auth;
mod storage;
mod table;

pub use auth::{AuthApi, AuthEvent, AuthSession, AuthUser};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
pub use table::{Order, TableQuery};

use std::sync::Arc;

use reqwest::{header, Client};
use url::Url;

use crate::config::BackendConfig;
use crate::{Error, Result};

/// Configured handle to the hosted store. Cheap to clone.
#[derive(Clone)]
pub struct Backend {
    http: Client,
    base: Url,
    anon_key: String,
    auth: AuthApi,
}

impl Backend {
    /// Create a handle that keeps its session in memory only.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Self::with_session_store(config, Arc::new(MemorySessionStore::new()))
    }

    /// Create a handle that persists its session through `store`.
    pub fn with_session_store(
        config: &BackendConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent("Tandem/0.1")
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let base = Url::parse(&config.url)?;
        let auth = AuthApi::new(http.clone(), base.clone(), config.anon_key.clone(), store);

        Ok(Self {
            http,
            base,
            anon_key: config.anon_key.clone(),
            auth,
        })
    }

    /// Start a generic table operation, like `backend.from("jokes")`.
    pub fn from(&self, table: &str) -> TableQuery {
        TableQuery::new(self.clone(), table)
    }

    /// The auth surface: sign-up/in/out, refresh, session events.
    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn rest_url(&self, table: &str) -> Result<Url> {
        self.base
            .join(&format!("rest/v1/{}", table))
            .map_err(Error::from)
    }

    /// Headers carried by every table request. The bearer token is the
    /// signed-in session's access token, falling back to the public key
    /// so unauthenticated calls are well-formed (and rejected serverside
    /// by row-level policy).
    pub(crate) fn rest_headers(&self) -> header::HeaderMap {
        let bearer = self
            .auth
            .access_token()
            .unwrap_or_else(|| self.anon_key.clone());

        let mut headers = header::HeaderMap::new();
        if let Ok(v) = self.anon_key.parse() {
            headers.insert("apikey", v);
        }
        if let Ok(v) = format!("Bearer {}", bearer).parse() {
            headers.insert(header::AUTHORIZATION, v);
        }
        headers
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").field("base", &self.base.as_str()).finish()
    }
}

/// Turn a non-success reply into a classified error, pulling the message
/// out of the store's JSON error body when there is one.
pub(crate) async fn error_from_response(response: reqwest::Response, what: &str) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Error::from_status(status, extract_message(&body), what)
}

fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_prefers_known_keys() {
        assert_eq!(extract_message(r#"{"message":"row not found"}"#), "row not found");
        assert_eq!(extract_message(r#"{"error_description":"bad login"}"#), "bad login");
        assert_eq!(extract_message("plain text"), "plain text");
    }

    #[test]
    fn test_rest_url_joins_table() {
        let config = BackendConfig::new("https://proj.example.co", "anon");
        let backend = Backend::new(&config).unwrap();
        let url = backend.rest_url("jokes").unwrap();
        assert_eq!(url.as_str(), "https://proj.example.co/rest/v1/jokes");
    }
}
