//! Drives the router in-process, covering both frontend query encodings and
//! the status code for every error class.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = sliding_window::app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

#[tokio::test]
async fn repeated_param_encoding() {
    let (status, body) = get(
        "/api/sliding-window?numbers=1&numbers=2&numbers=3&numbers=4&windowSize=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maxSum"], 7);
}

#[tokio::test]
async fn comma_joined_encoding() {
    let (status, body) = get("/api/sliding-window?numbers=4,2,1,7,8,1,2&windowSize=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maxSum"], 16);
}

#[tokio::test]
async fn negative_numbers() {
    let (status, body) = get("/api/sliding-window?numbers=-1,-2,-3&windowSize=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maxSum"], -1);
}

#[tokio::test]
async fn single_number() {
    let (status, body) = get("/api/sliding-window?numbers=5&windowSize=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maxSum"], 5);
}

#[tokio::test]
async fn unparseable_number() {
    let (status, body) = get("/api/sliding-window?numbers=1,abc&windowSize=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn invalid_window_size() {
    for query in ["windowSize=0", "windowSize=-2", "windowSize=abc", ""] {
        let (status, body) = get(&format!("/api/sliding-window?numbers=1,2&{query}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "query={query:?}");
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn window_size_too_large() {
    let (status, body) = get("/api/sliding-window?numbers=1,2,3&windowSize=5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("exceeds"));
}

#[tokio::test]
async fn empty_sequence() {
    let (status, body) = get("/api/sliding-window?numbers=&windowSize=3").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn overflow_is_a_server_error() {
    let (status, body) = get(&format!(
        "/api/sliding-window?numbers={},1&windowSize=2",
        i64::MAX
    ))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());
}
