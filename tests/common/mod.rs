//! Shared helpers for the integration tests: a mocked backend and a
//! signed-in session context.
#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tandem::config::BackendConfig;
use tandem::{Backend, SessionContext};

pub const USER_ID: &str = "11111111-2222-3333-4444-555555555555";

/// Backend handle pointed at the mock server.
pub fn backend_for(server: &MockServer) -> Backend {
    Backend::new(&BackendConfig::new(server.uri(), "anon-key")).expect("backend")
}

/// The JSON session body the auth endpoints reply with.
pub fn session_body() -> serde_json::Value {
    json!({
        "access_token": "access-1",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-1",
        "user": {
            "id": USER_ID,
            "email": "panda@example.com",
            "user_metadata": { "username": "panda", "is_partner": false }
        }
    })
}

/// Mount the password-grant endpoint.
pub async fn mount_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(server)
        .await;
}

/// Build a context that has already signed in against the mock server.
pub async fn signed_in_context(server: &MockServer) -> (Backend, SessionContext) {
    mount_sign_in(server).await;

    let backend = backend_for(server);
    let session = SessionContext::new(backend.clone());
    session.initialize().await.expect("initialize");
    session
        .sign_in("panda@example.com", "secret")
        .await
        .expect("sign in");

    wait_for_identity(&session, true).await;
    (backend, session)
}

/// Poll the context until the identity presence matches, or panic.
pub async fn wait_for_identity(session: &SessionContext, present: bool) {
    let mut rx = session.subscribe();
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if rx.borrow().identity.is_some() == present {
                return;
            }
            rx.changed().await.expect("watch closed");
        }
    })
    .await
    .expect("session state never settled");
}
