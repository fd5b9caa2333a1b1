//! Gallery flows: the like toggle's read-then-write shape and the
//! count-joined photo list.

mod common;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{backend_for, signed_in_context, USER_ID};
use tandem::db;
use tandem::screens::GalleryScreen;

fn photo_row(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": USER_ID,
        "image_ref": "photos/sunrise.jpg",
        "caption": "first sunrise together",
        "album": "travel",
        "is_favorite": false,
        "taken_on": "2026-08-01",
        "created_at": "2026-08-01T10:00:00Z"
    })
}

fn like_row(id: &str, photo_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": USER_ID,
        "photo_id": photo_id,
        "created_at": "2026-08-02T10:00:00Z"
    })
}

/// With no existing like, toggling inserts one and reports liked.
#[tokio::test]
async fn test_toggle_like_inserts_when_absent() {
    let server = MockServer::start().await;
    let backend = backend_for(&server);

    Mock::given(method("GET"))
        .and(path("/rest/v1/photo_likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/photo_likes"))
        .and(body_partial_json(json!({ "photo_id": "g-1", "user_id": USER_ID })))
        .respond_with(ResponseTemplate::new(201).set_body_json(like_row("l-1", "g-1")))
        .expect(1)
        .mount(&server)
        .await;

    let liked = db::toggle_like(&backend, "g-1", USER_ID)
        .await
        .expect("toggle");
    assert!(liked);
}

/// With an existing like, toggling deletes it and reports unliked.
#[tokio::test]
async fn test_toggle_like_deletes_when_present() {
    let server = MockServer::start().await;
    let backend = backend_for(&server);

    Mock::given(method("GET"))
        .and(path("/rest/v1/photo_likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([like_row("l-1", "g-1")])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/photo_likes"))
        .and(query_param("id", "eq.l-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let liked = db::toggle_like(&backend, "g-1", USER_ID)
        .await
        .expect("toggle");
    assert!(!liked);
}

/// The gallery list joins each photo with its like count and my flag.
#[tokio::test]
async fn test_gallery_refresh_joins_counts() {
    let server = MockServer::start().await;
    let (backend, session) = signed_in_context(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([photo_row("g-1")])))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/photo_likes"))
        .and(query_param("photo_id", "eq.g-1"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-range", "*/2"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/photo_likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([like_row("l-1", "g-1")])))
        .mount(&server)
        .await;

    let mut screen = GalleryScreen::new(backend, session);
    screen.refresh().await;

    assert_eq!(screen.photos.len(), 1);
    assert_eq!(screen.photos[0].like_count, 2);
    assert!(screen.photos[0].liked_by_me);
    assert!(screen.take_notice().is_none());
}

/// Comments load oldest-first for the open photo.
#[tokio::test]
async fn test_comment_thread_loads() {
    let server = MockServer::start().await;
    let (backend, session) = signed_in_context(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/photo_comments"))
        .and(query_param("photo_id", "eq.g-1"))
        .and(query_param("order", "created_at.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c-1",
            "user_id": USER_ID,
            "photo_id": "g-1",
            "content": "my favorite morning",
            "created_at": "2026-08-02T08:00:00Z"
        }])))
        .mount(&server)
        .await;

    let mut screen = GalleryScreen::new(backend, session);
    screen.load_comments("g-1").await;

    assert_eq!(screen.comments.len(), 1);
    assert_eq!(screen.comments[0].content, "my favorite morning");
}
