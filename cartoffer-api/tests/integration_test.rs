use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use cartoffer_api::{app, AppState};
use cartoffer_core::{SegmentError, SegmentLookup};
use cartoffer_shared::{ApiResponse, ApplyOfferResponse};
use cartoffer_store::{app_config::SegmentServiceConfig, HttpSegmentClient};
use serde_json::{json, Value};
use tower::ServiceExt;

struct StaticSegments(HashMap<i64, String>);

#[async_trait]
impl SegmentLookup for StaticSegments {
    async fn lookup_segment(&self, user_id: i64) -> Result<String, SegmentError> {
        self.0.get(&user_id).cloned().ok_or(SegmentError::Status(404))
    }
}

fn test_app() -> Router {
    let segments = StaticSegments(HashMap::from([
        (1, "p1".to_string()),
        (2, "p2".to_string()),
        (3, "p3".to_string()),
    ]));
    app(AppState::in_memory(Arc::new(segments)))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn submit(app: &Router, restaurant_id: i64, offer_type: &str, value: i64, segments: Value) {
    let (status, body) = post_json(
        app,
        "/api/v1/offer",
        json!({
            "restaurant_id": restaurant_id,
            "offer_type": offer_type,
            "offer_value": value,
            "customer_segment": segments,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ack: ApiResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(ack, ApiResponse::success());
}

async fn apply(app: &Router, cart_value: i64, restaurant_id: i64, user_id: i64) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/v1/cart/apply_offer",
        json!({ "cart_value": cart_value, "restaurant_id": restaurant_id, "user_id": user_id }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let resp: ApplyOfferResponse = serde_json::from_slice(&body).unwrap();
    resp.cart_value
}

#[tokio::test]
async fn test_submit_then_apply() {
    let app = test_app();
    submit(&app, 1, "FLATX", 10, json!(["p1"])).await;
    submit(&app, 2, "FLAT_PERCENT", 10, json!(["p2"])).await;
    submit(&app, 11, "PERCENTAGE", 10, json!(["p1"])).await;
    submit(&app, 6, "FLATX", 60, json!(["p1"])).await;

    assert_eq!(apply(&app, 200, 1, 1).await, 190);
    assert_eq!(apply(&app, 200, 2, 2).await, 180);
    assert_eq!(apply(&app, 195, 11, 1).await, 176);
    assert_eq!(apply(&app, 50, 6, 1).await, 0);
    assert_eq!(apply(&app, 200, 9, 1).await, 200);
}

#[tokio::test]
async fn test_negative_cart_never_returned() {
    let app = test_app();
    submit(&app, 1, "FLATX", 10, json!(["p1"])).await;

    assert_eq!(apply(&app, -5, 1, 1).await, 0);
    assert_eq!(apply(&app, -5, 9, 1).await, 0);
}

#[tokio::test]
async fn test_null_segments_and_unknown_user() {
    let app = test_app();
    submit(&app, 22, "FLATX", 10, Value::Null).await;
    submit(&app, 25, "FLATX", 10, json!(["p1"])).await;

    assert_eq!(apply(&app, 100, 22, 1).await, 100);
    assert_eq!(apply(&app, 100, 25, 999).await, 100);
}

#[tokio::test]
async fn test_reset_clears_offers() {
    let app = test_app();
    submit(&app, 1, "FLATX", 10, json!(["p1"])).await;
    assert_eq!(apply(&app, 200, 1, 1).await, 190);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/test/reset")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(apply(&app, 200, 1, 1).await, 200);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = test_app();

    let (status, body) =
        post_json(&app, "/api/v1/cart/apply_offer", json!({ "cart_value": "lots" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_slice(&body).unwrap();
    assert!(err["error"].is_string());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/offer")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

async fn user_segment(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    match params.get("user_id").map(String::as_str) {
        Some("1") => (StatusCode::OK, r#"{"segment": "p1"}"#.to_string()),
        Some("26") => (StatusCode::OK, r#"{"segment": "101"}"#.to_string()),
        Some("8") => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
        _ => (StatusCode::NOT_FOUND, String::new()),
    }
}

#[tokio::test]
async fn test_against_http_segment_service() {
    let segment_service = Router::new().route("/api/v1/user_segment", get(user_segment));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, segment_service).await.unwrap();
    });

    let client = HttpSegmentClient::new(&SegmentServiceConfig {
        base_url: format!("http://{}", addr),
        timeout_ms: 2000,
    })
    .unwrap();
    let app = app(AppState::in_memory(Arc::new(client)));

    submit(&app, 1, "FLATX", 10, json!(["p1"])).await;
    submit(&app, 8, "FLATX", 10, json!(["p1"])).await;
    submit(&app, 26, "FLATX", 15, json!(["101"])).await;

    assert_eq!(apply(&app, 200, 1, 1).await, 190);
    assert_eq!(apply(&app, 200, 8, 8).await, 200);
    assert_eq!(apply(&app, 100, 26, 26).await, 85);
    assert_eq!(apply(&app, 100, 1, 999).await, 100);
}
