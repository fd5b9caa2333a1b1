//! Session lifecycle tests against a mocked auth surface.

mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{backend_for, mount_sign_in, session_body, signed_in_context, wait_for_identity};
use tandem::config::BackendConfig;
use tandem::{Backend, Error, SessionContext};

/// Signing in updates the held identity through the auth event stream.
#[tokio::test]
async fn test_sign_in_populates_identity() {
    let server = MockServer::start().await;
    let (_backend, session) = signed_in_context(&server).await;

    let identity = session.identity().expect("signed in");
    assert_eq!(identity.id, common::USER_ID);
    assert_eq!(identity.username, "panda");
    assert!(!identity.is_partner);
    assert!(!session.is_loading());
}

/// A rejected password grant surfaces as invalid credentials.
#[tokio::test]
async fn test_sign_in_with_bad_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let session = SessionContext::new(backend);
    session.initialize().await.expect("initialize");

    let err = session
        .sign_in("panda@example.com", "wrong")
        .await
        .expect_err("sign in must fail");
    assert!(matches!(err, Error::InvalidCredentials));
    assert!(session.identity().is_none());
}

/// Signing out clears the identity; later table calls fall back to the
/// public key and come back unauthenticated.
#[tokio::test]
async fn test_sign_out_clears_identity() {
    let server = MockServer::start().await;
    let (backend, session) = signed_in_context(&server).await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    session.sign_out().await.expect("sign out");
    wait_for_identity(&session, false).await;
    assert!(session.identity().is_none());

    // Protected table reads now carry the anon key and get rejected.
    Mock::given(method("GET"))
        .and(path("/rest/v1/jokes"))
        .and(header("Authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "JWT required"
        })))
        .mount(&server)
        .await;

    let err = tandem::db::list_jokes(&backend, common::USER_ID)
        .await
        .expect_err("unauthenticated");
    assert!(err.is_auth());
}

/// A persisted, unexpired session restores without any auth call.
#[tokio::test]
async fn test_restore_persisted_session() {
    let server = MockServer::start().await;

    let backend = backend_for(&server);

    // Seed the session store by signing in once, then drop every mock:
    // a correct restore needs no further requests.
    mount_sign_in(&server).await;
    backend
        .auth()
        .sign_in("panda@example.com", "secret")
        .await
        .expect("seed session");
    server.reset().await;

    let session = SessionContext::new(backend.clone());
    session.initialize().await.expect("restore");

    assert_eq!(session.identity().expect("restored").username, "panda");
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// An expired persisted session is traded for a fresh one exactly once.
#[tokio::test]
async fn test_restore_refreshes_expired_session() {
    let server = MockServer::start().await;

    let store: Arc<dyn tandem::backend::SessionStore> =
        Arc::new(tandem::backend::MemorySessionStore::new());

    // Persist an already-expired session.
    let expired = tandem::backend::AuthSession {
        access_token: "stale".into(),
        refresh_token: "refresh-1".into(),
        expires_at: chrono::Utc::now() - chrono::Duration::hours(1),
        user: serde_json::from_value(session_body()["user"].clone()).unwrap(),
    };
    store.save(&expired).await.unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        Backend::with_session_store(&BackendConfig::new(server.uri(), "anon-key"), store)
            .expect("backend");
    let session = SessionContext::new(backend);
    session.initialize().await.expect("restore with refresh");

    assert_eq!(session.identity().expect("refreshed").id, common::USER_ID);
}

/// Sign-up that starts a session immediately also mirrors the profile
/// row.
#[tokio::test]
async fn test_sign_up_creates_profile_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user_profiles"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": common::USER_ID,
            "username": "panda",
            "is_partner": false,
            "created_at": "2026-08-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let session = SessionContext::new(backend);
    session.initialize().await.expect("initialize");
    session
        .sign_up("panda@example.com", "secret", "panda")
        .await
        .expect("sign up");

    wait_for_identity(&session, true).await;
}
