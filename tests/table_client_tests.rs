//! Protocol tests for the generic table client: request shapes, reply
//! parsing, and error classification.

mod common;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::backend_for;
use tandem::backend::Order;
use tandem::config::BackendConfig;
use tandem::models::Joke;
use tandem::{Backend, Error};

fn joke_row(id: &str, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": common::USER_ID,
        "content": content,
        "category": "general",
        "created_at": "2026-08-01T10:00:00Z"
    })
}

/// Selects carry the key headers plus filter and order parameters.
#[tokio::test]
async fn test_select_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/jokes"))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer anon-key"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", format!("eq.{}", common::USER_ID).as_str()))
        .and(query_param("order", "created_at.desc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([joke_row("j-1", "knock knock")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let jokes: Vec<Joke> = backend
        .from("jokes")
        .eq("user_id", common::USER_ID)
        .order("created_at", Order::Desc)
        .fetch()
        .await
        .expect("select");

    assert_eq!(jokes.len(), 1);
    assert_eq!(jokes[0].content, "knock knock");
}

/// Inserts ask for the stored representation back.
#[tokio::test]
async fn test_insert_returns_stored_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/jokes"))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(json!({ "content": "why did the panda" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(joke_row("j-9", "why did the panda")))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let joke: Joke = backend
        .from("jokes")
        .insert(&json!({
            "id": "j-9",
            "user_id": common::USER_ID,
            "content": "why did the panda",
            "category": "general",
            "created_at": "2026-08-01T10:00:00Z"
        }))
        .await
        .expect("insert");

    assert_eq!(joke.id, "j-9");
}

/// Counts ride on the Content-Range reply header.
#[tokio::test]
async fn test_count_parses_content_range() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/post_reactions"))
        .and(header("Prefer", "count=exact"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-range", "*/7"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let count = backend
        .from("post_reactions")
        .eq("post_id", "p-1")
        .count()
        .await
        .expect("count");
    assert_eq!(count, 7);
}

/// A single-row read that misses maps to NotFound.
#[tokio::test]
async fn test_single_row_miss_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = tandem::db::get_profile(&backend, "nobody")
        .await
        .expect_err("must miss");
    assert!(err.is_not_found());
}

/// Status codes land in the right error kinds.
#[tokio::test]
async fn test_error_classification() {
    let server = MockServer::start().await;
    for (status, body) in [
        (401, json!({ "message": "JWT expired" })),
        (400, json!({ "message": "invalid input syntax" })),
        (500, json!({ "message": "internal" })),
    ] {
        let _guard = Mock::given(method("GET"))
            .and(path("/rest/v1/probe"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let backend = backend_for(&server);
        let err = backend
            .from("probe")
            .fetch::<serde_json::Value>()
            .await
            .expect_err("non-success");

        match status {
            401 => assert!(err.is_auth()),
            400 => assert!(matches!(err, Error::Validation(_))),
            _ => assert!(matches!(err, Error::Backend { status: 500, .. })),
        }
    }
}

/// A dead endpoint surfaces as a network error, not a backend reply.
#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on this port.
    let backend = Backend::new(&BackendConfig::new("http://127.0.0.1:9", "anon-key"))
        .expect("backend");

    let err = backend
        .from("jokes")
        .fetch::<serde_json::Value>()
        .await
        .expect_err("unreachable");
    assert!(err.is_network());
}
