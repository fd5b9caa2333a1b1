//! Session context: the process-wide identity holder, made explicit.
//!
//! One context is created at app start and handed to every screen; there
//! is no global. It restores the persisted session once, then follows
//! the backend's auth events for the lifetime of the process. Sign-in
//! and sign-up succeed through those events, not through return values.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::backend::{AuthEvent, Backend};
use crate::models::Identity;
use crate::{db, Result};

/// What screens see: who is signed in, and whether the initial session
/// restore is still in flight.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

/// Shared session context. Cheap to clone; clones observe the same
/// state.
#[derive(Clone)]
pub struct SessionContext {
    backend: Backend,
    state: Arc<watch::Sender<AuthState>>,
}

impl SessionContext {
    /// Create a context in the loading state. Call [`initialize`] once
    /// before handing it to screens.
    ///
    /// [`initialize`]: SessionContext::initialize
    pub fn new(backend: Backend) -> Self {
        let (state, _) = watch::channel(AuthState {
            identity: None,
            loading: true,
        });
        Self {
            backend,
            state: Arc::new(state),
        }
    }

    /// Restore the persisted session and start following auth events.
    pub async fn initialize(&self) -> Result<()> {
        // Subscribe before restoring so the initial event is not missed.
        let events = self.backend.auth().subscribe();
        let state = self.state.clone();
        tokio::spawn(follow_events(events, state));

        match self.backend.auth().restore().await {
            Ok(session) => {
                // Applied here as well as via the event, so callers see
                // the restored state as soon as initialize returns.
                self.state.send_replace(AuthState {
                    identity: session.map(|s| Identity::from_auth_user(&s.user)),
                    loading: false,
                });
                Ok(())
            }
            Err(e) => {
                // Failed restore still ends the loading state; the app
                // starts signed out.
                self.state.send_replace(AuthState {
                    identity: None,
                    loading: false,
                });
                Err(e)
            }
        }
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Watch for session changes (sign-in, sign-out, refresh).
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Pass-through sign-in. The held identity updates via the auth
    /// event, not here.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        self.backend.auth().sign_in(email, password).await
    }

    /// Pass-through sign-up. When a session begins immediately (no email
    /// confirmation), the matching profile row is created as well.
    pub async fn sign_up(&self, email: &str, password: &str, username: &str) -> Result<()> {
        self.backend.auth().sign_up(email, password, username).await?;

        if let Some(session) = self.backend.auth().session() {
            if let Err(e) =
                db::create_profile(&self.backend, &session.user.id, username, false).await
            {
                // The identity still works without the mirror row.
                warn!(%e, "Could not create profile row after sign-up");
            }
        }
        Ok(())
    }

    /// Pass-through sign-out; the held identity clears via the event.
    pub async fn sign_out(&self) -> Result<()> {
        self.backend.auth().sign_out().await
    }

    /// Update display fields on the signed-in identity.
    pub async fn update_profile(
        &self,
        username: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<()> {
        let mut updates = serde_json::Map::new();
        if let Some(username) = username {
            updates.insert("username".into(), json!(username));
        }
        if let Some(avatar) = avatar {
            updates.insert("avatar".into(), json!(avatar));
        }
        if updates.is_empty() {
            return Ok(());
        }

        self.backend
            .auth()
            .update_user_metadata(serde_json::Value::Object(updates))
            .await?;
        Ok(())
    }
}

async fn follow_events(
    mut events: broadcast::Receiver<AuthEvent>,
    state: Arc<watch::Sender<AuthState>>,
) {
    loop {
        match events.recv().await {
            Ok(event) => apply(&state, event),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Auth event stream lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

fn apply(state: &watch::Sender<AuthState>, event: AuthEvent) {
    let identity = match &event {
        AuthEvent::InitialSession(session) => {
            session.as_ref().map(|s| Identity::from_auth_user(&s.user))
        }
        AuthEvent::SignedIn(session)
        | AuthEvent::TokenRefreshed(session)
        | AuthEvent::UserUpdated(session) => Some(Identity::from_auth_user(&session.user)),
        AuthEvent::SignedOut => None,
    };

    match &identity {
        Some(id) => info!(user = %id.id, "Session is now signed in"),
        None => info!("Session is now signed out"),
    }

    state.send_replace(AuthState {
        identity,
        loading: false,
    });
}
