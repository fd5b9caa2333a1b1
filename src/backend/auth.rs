//! Session-based authentication against the hosted auth surface.
//!
//! Pass-through sign-up/sign-in/sign-out plus token refresh. Successful
//! calls adopt the returned session, persist it through the session
//! store, and broadcast an [`AuthEvent`]; the session context follows
//! those events rather than return values.

use std::sync::{Arc, RwLock};

use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use url::Url;

use super::{error_from_response, SessionStore};
use crate::{Error, Result};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Authenticated identity as the auth surface reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Free-form profile metadata (username, partner flag, avatar).
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// One signed-in session: tokens, expiry, identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Session change notifications.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// Result of restoring the persisted session at startup.
    InitialSession(Option<AuthSession>),
    SignedIn(AuthSession),
    SignedOut,
    TokenRefreshed(AuthSession),
    UserUpdated(AuthSession),
}

/// Wire shape of the token/signup endpoints. `access_token` is absent
/// when sign-up requires email confirmation before a session exists.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    user: Option<AuthUser>,
}

/// Client for the auth surface. Cheap to clone; clones share session
/// state and the event channel.
#[derive(Clone)]
pub struct AuthApi {
    http: Client,
    base: Url,
    anon_key: String,
    store: Arc<dyn SessionStore>,
    current: Arc<RwLock<Option<AuthSession>>>,
    events: broadcast::Sender<AuthEvent>,
}

impl AuthApi {
    pub(crate) fn new(
        http: Client,
        base: Url,
        anon_key: String,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            http,
            base,
            anon_key,
            store,
            current: Arc::new(RwLock::new(None)),
            events,
        }
    }

    /// Subscribe to session change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current session, if signed in.
    pub fn session(&self) -> Option<AuthSession> {
        self.current.read().ok().and_then(|s| s.clone())
    }

    /// Access token for table calls, if signed in.
    pub fn access_token(&self) -> Option<String> {
        self.current
            .read()
            .ok()
            .and_then(|s| s.as_ref().map(|s| s.access_token.clone()))
    }

    /// Restore the persisted session at startup, refreshing it if it has
    /// expired. Emits `InitialSession` either way.
    pub async fn restore(&self) -> Result<Option<AuthSession>> {
        let stored = self.store.load().await?;

        let session = match stored {
            None => None,
            Some(session) if !session.is_expired() => {
                self.set_current(Some(session.clone()));
                Some(session)
            }
            Some(expired) => match self.refresh_with(&expired.refresh_token).await {
                Ok(fresh) => Some(fresh),
                Err(e) if e.is_auth() => {
                    warn!("Persisted session could not be refreshed, discarding");
                    self.store.clear().await?;
                    None
                }
                Err(e) => return Err(e),
            },
        };

        self.emit(AuthEvent::InitialSession(session.clone()));
        Ok(session)
    }

    /// Register a new identity. A session only begins here when the
    /// backend is configured to skip email confirmation.
    pub async fn sign_up(&self, email: &str, password: &str, username: &str) -> Result<()> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "username": username, "is_partner": false },
        });

        let response = self.post("auth/v1/signup", &body, None).await?;
        let token: TokenResponse = response.json().await.map_err(Error::from)?;

        if let Some(session) = self.session_from_token(token)? {
            self.adopt(session.clone()).await?;
            info!("Signed up and signed in");
            self.emit(AuthEvent::SignedIn(session));
        } else {
            info!("Signed up; awaiting confirmation");
        }
        Ok(())
    }

    /// Email/password sign-in.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let body = json!({ "email": email, "password": password });

        let response = self
            .post("auth/v1/token", &body, Some("grant_type=password"))
            .await
            .map_err(|e| match e {
                Error::Validation(_) | Error::Backend { status: 400, .. } => {
                    Error::InvalidCredentials
                }
                other => other,
            })?;

        let token: TokenResponse = response.json().await.map_err(Error::from)?;
        let session = self
            .session_from_token(token)?
            .ok_or_else(|| Error::Internal("Sign-in reply carried no session".into()))?;

        self.adopt(session.clone()).await?;
        info!(user = %session.user.id, "Signed in");
        self.emit(AuthEvent::SignedIn(session));
        Ok(())
    }

    /// Revoke the current session and clear local state.
    pub async fn sign_out(&self) -> Result<()> {
        let token = self.access_token().ok_or(Error::Unauthenticated)?;

        let url = self.url("auth/v1/logout", None)?;
        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "session").await);
        }

        self.set_current(None);
        self.store.clear().await?;
        info!("Signed out");
        self.emit(AuthEvent::SignedOut);
        Ok(())
    }

    /// Trade the current refresh token for a fresh session.
    pub async fn refresh(&self) -> Result<AuthSession> {
        let refresh_token = self
            .session()
            .map(|s| s.refresh_token)
            .ok_or(Error::Unauthenticated)?;
        self.refresh_with(&refresh_token).await
    }

    /// Merge updates into the signed-in identity's profile metadata.
    pub async fn update_user_metadata(&self, updates: serde_json::Value) -> Result<AuthUser> {
        let mut session = self.session().ok_or(Error::Unauthenticated)?;

        let url = self.url("auth/v1/user", None)?;
        let response = self
            .http
            .put(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .json(&json!({ "data": updates }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "profile").await);
        }

        let user: AuthUser = response.json().await.map_err(Error::from)?;
        session.user = user.clone();
        self.adopt(session.clone()).await?;
        self.emit(AuthEvent::UserUpdated(session));
        Ok(user)
    }

    async fn refresh_with(&self, refresh_token: &str) -> Result<AuthSession> {
        let body = json!({ "refresh_token": refresh_token });

        let response = self
            .post("auth/v1/token", &body, Some("grant_type=refresh_token"))
            .await?;
        let token: TokenResponse = response.json().await.map_err(Error::from)?;
        let session = self
            .session_from_token(token)?
            .ok_or_else(|| Error::Internal("Refresh reply carried no session".into()))?;

        self.adopt(session.clone()).await?;
        debug!(user = %session.user.id, "Session refreshed");
        self.emit(AuthEvent::TokenRefreshed(session.clone()));
        Ok(session)
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
        query: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = self.url(path, query)?;
        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "session").await);
        }
        Ok(response)
    }

    fn url(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self.base.join(path)?;
        url.set_query(query);
        Ok(url)
    }

    fn session_from_token(&self, token: TokenResponse) -> Result<Option<AuthSession>> {
        let (access_token, refresh_token, user) = match (
            token.access_token,
            token.refresh_token,
            token.user,
        ) {
            (Some(a), Some(r), Some(u)) => (a, r, u),
            _ => return Ok(None),
        };

        let expires_at = token
            .expires_at
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .or_else(|| {
                token
                    .expires_in
                    .map(|secs| Utc::now() + Duration::seconds(secs))
            })
            .or_else(|| jwt_expiry(&access_token))
            .ok_or_else(|| Error::Internal("Session reply carried no expiry".into()))?;

        Ok(Some(AuthSession {
            access_token,
            refresh_token,
            expires_at,
            user,
        }))
    }

    async fn adopt(&self, session: AuthSession) -> Result<()> {
        self.set_current(Some(session.clone()));
        self.store.save(&session).await
    }

    fn set_current(&self, session: Option<AuthSession>) {
        if let Ok(mut guard) = self.current.write() {
            *guard = session;
        }
    }

    fn emit(&self, event: AuthEvent) {
        // Nobody listening is fine; the context subscribes lazily.
        let _ = self.events.send(event);
    }
}

/// Fall back to the `exp` claim inside the access token when the reply
/// omits an explicit expiry.
fn jwt_expiry(access_token: &str) -> Option<DateTime<Utc>> {
    let payload = access_token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    DateTime::<Utc>::from_timestamp(claims.get("exp")?.as_i64()?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_expiry_decodes_exp_claim() {
        // {"exp": 2000000000}
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(r#"{"exp":2000000000}"#);
        let token = format!("header.{}.sig", payload);

        let expiry = jwt_expiry(&token).unwrap();
        assert_eq!(expiry.timestamp(), 2_000_000_000);
    }

    #[test]
    fn test_jwt_expiry_rejects_garbage() {
        assert!(jwt_expiry("not-a-jwt").is_none());
        assert!(jwt_expiry("a.!!!.c").is_none());
    }

    #[test]
    fn test_session_expiry_check() {
        let session = AuthSession {
            access_token: "t".into(),
            refresh_token: "r".into(),
            expires_at: Utc::now() - Duration::minutes(1),
            user: AuthUser {
                id: "u-1".into(),
                email: None,
                created_at: None,
                user_metadata: serde_json::Value::Null,
            },
        };
        assert!(session.is_expired());
    }
}
