//! End-to-end tests against the HTTP surface, memory backend.

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use vidstore::adapters::fs::FsBlobStore;
use vidstore::adapters::http;
use vidstore::adapters::http::PRINCIPAL_HEADER;
use vidstore::adapters::memory::MemoryStore;
use vidstore::application::catalog::CatalogService;

fn app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CatalogService::new(MemoryStore::new(), FsBlobStore::new(dir.path()));
    (http::router(Arc::new(catalog)), dir)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, req).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn submit_req(name: &str, duration: u64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/video")
        .header(header::HOST, "localhost:8080")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": name, "duration": duration, "contentType": "video/mp4"}).to_string(),
        ))
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_as(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(PRINCIPAL_HEADER, user)
        .body(Body::empty())
        .unwrap()
}

fn upload_req(id: u64, payload: &[u8]) -> Request<Body> {
    let boundary = "vidstore-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"data\"; filename=\"clip.mp4\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: video/mp4\r\n\r\n");
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri(format!("/video/{}/data", id))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn submit_assigns_monotonic_ids_and_location() {
    let (app, _dir) = app();

    let (status, first) = send_json(&app, submit_req("a", 10)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], 1);
    assert_eq!(first["location"], "http://localhost:8080/video/1/data");
    assert_eq!(first["likes"], 0);

    let (_, second) = send_json(&app, submit_req("b", 20)).await;
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn list_and_get_return_submitted_videos() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;
    send(&app, submit_req("b", 20)).await;

    let (status, listed) = send_json(&app, get_req("/video")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "a");

    let (status, video) = send_json(&app, get_req("/video/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(video["name"], "b");
    assert_eq!(video["contentType"], "video/mp4");
}

#[tokio::test]
async fn unknown_id_is_404_everywhere() {
    let (app, _dir) = app();

    let (status, _) = send(&app, get_req("/video/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, get_req("/video/999/data")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, get_req("/video/999/likedby")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, post_as("/video/999/like", "alice")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, post_as("/video/999/unlike", "alice")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, upload_req(999, b"bytes")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn like_toggle_flow() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;

    let (status, _) = send(&app, post_as("/video/1/like", "alice")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, video) = send_json(&app, get_req("/video/1")).await;
    assert_eq!(video["likes"], 1);

    // second like by the same user changes nothing
    let (status, _) = send(&app, post_as("/video/1/like", "alice")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, video) = send_json(&app, get_req("/video/1")).await;
    assert_eq!(video["likes"], 1);

    let (_, likers) = send_json(&app, get_req("/video/1/likedby")).await;
    assert_eq!(likers, json!(["alice"]));

    let (status, _) = send(&app, post_as("/video/1/unlike", "alice")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, video) = send_json(&app, get_req("/video/1")).await;
    assert_eq!(video["likes"], 0);

    let (status, _) = send(&app, post_as("/video/1/unlike", "alice")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, likers) = send_json(&app, get_req("/video/1/likedby")).await;
    assert_eq!(likers, json!([]));
}

#[tokio::test]
async fn likes_are_counted_per_user() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;

    send(&app, post_as("/video/1/like", "alice")).await;
    send(&app, post_as("/video/1/like", "bob")).await;

    let (_, video) = send_json(&app, get_req("/video/1")).await;
    assert_eq!(video["likes"], 2);

    let (_, likers) = send_json(&app, get_req("/video/1/likedby")).await;
    let mut names: Vec<String> = likers
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[tokio::test]
async fn like_without_principal_is_unauthorized() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;

    let req = Request::builder()
        .method("POST")
        .uri("/video/1/like")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_then_download_is_byte_identical() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;

    let payload = b"pretend this is an mp4".repeat(100);
    let (status, body) = send(&app, upload_req(1, &payload)).await;
    assert_eq!(status, StatusCode::OK);
    let report: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["state"], "READY");

    let resp = app.clone().oneshot(get_req("/video/1/data")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "video/mp4"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_LENGTH).unwrap(),
        &payload.len().to_string()
    );
    let downloaded = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(downloaded.as_ref(), payload.as_slice());
}

#[tokio::test]
async fn download_before_upload_is_404() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;

    let (status, _) = send(&app, get_req("/video/1/data")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_without_data_field_is_bad_request() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;

    let boundary = "vidstore-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nnope\r\n--{b}--\r\n",
        b = boundary
    );
    let req = Request::builder()
        .method("POST")
        .uri("/video/1/data")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_by_title_is_exact_match() {
    let (app, _dir) = app();
    send(&app, submit_req("holiday", 10)).await;
    send(&app, submit_req("holiday trip", 20)).await;

    let (status, found) =
        send_json(&app, get_req("/video/search/findByTitle?title=holiday")).await;
    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], 1);

    let (_, found) = send_json(&app, get_req("/video/search/findByTitle?title=holi")).await;
    assert_eq!(found.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_by_duration_is_strictly_less_than() {
    let (app, _dir) = app();
    send(&app, submit_req("a", 10)).await;
    send(&app, submit_req("b", 20)).await;

    let (status, found) = send_json(
        &app,
        get_req("/video/search/findByDurationLessThan?duration=20"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "a");
}
