/// Router-level tests for the gateway's HTTP surface. Validation failures
/// are rejected locally, so no live node is needed.
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use sui_split::api::server::create_router;
use sui_split::{AppConfig, SuiRpcClient};

fn test_router() -> axum::Router {
    let config = AppConfig::default();
    create_router(Arc::new(SuiRpcClient::new(&config).unwrap()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let response = test_router()
        .oneshot(Request::builder().uri("/api/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("working"));
}

async fn post_create_group(payload: Value) -> axum::response::Response {
    test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create-expense-group")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_group_rejects_empty_participants() {
    let response = post_create_group(json!({
        "creator": "0xabc",
        "participants": [],
    }))
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Invalid input: creator and participants are required"
    );
}

#[tokio::test]
async fn test_create_group_rejects_missing_creator() {
    let response = post_create_group(json!({
        "participants": ["0xabc", "0xdef"],
    }))
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Invalid input: creator and participants are required"
    );
}
