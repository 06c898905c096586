// Drives the public router the way the binary wires it, over an in memory event store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use bank_accounts::shared::infrastructure::event_store::EventStore;
use bank_accounts::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use bank_accounts::shell::{http::router, state::AppState};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn open(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/accounts", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["accountId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn persists_every_accepted_command_as_one_row() {
    let event_store = Arc::new(InMemoryEventStore::new());
    let app = router(AppState::new(event_store.clone()));
    let id = open(&app).await;

    let deposit = format!("/api/accounts/{id}/deposit");
    let withdraw = format!("/api/accounts/{id}/withdraw");
    let limit = format!("/api/accounts/{id}/limit");

    assert_eq!(send(&app, "POST", &deposit, Some(json!({"amount": "100"}))).await.0, StatusCode::ACCEPTED);
    assert_eq!(send(&app, "PUT", &limit, Some(json!({"limit": "-50"}))).await.0, StatusCode::ACCEPTED);
    assert_eq!(send(&app, "POST", &withdraw, Some(json!({"amount": "150"}))).await.0, StatusCode::ACCEPTED);
    assert_eq!(send(&app, "POST", &withdraw, Some(json!({"amount": "0.01"}))).await.0, StatusCode::BAD_REQUEST);

    let stream_id = Uuid::parse_str(&id).unwrap();
    let rows = event_store.read_stream(stream_id).await.unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.windows(2).all(|pair| pair[0].event_id < pair[1].event_id));

    let (status, body) = send(&app, "GET", &format!("/api/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "-50");
    assert_eq!(body["limit"], "-50");
}

#[tokio::test]
async fn hides_a_deleted_account_from_every_route() {
    let app = router(AppState::new(Arc::new(InMemoryEventStore::new())));
    let kept = open(&app).await;
    let deleted = open(&app).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/accounts/{deleted}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", "/api/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accountIds"], json!([kept]));

    for (method, uri, payload) in [
        ("GET", format!("/api/accounts/{deleted}"), None),
        ("DELETE", format!("/api/accounts/{deleted}"), None),
        ("POST", format!("/api/accounts/{deleted}/deposit"), Some(json!({"amount": 1}))),
        ("POST", format!("/api/accounts/{deleted}/withdraw"), Some(json!({"amount": 1}))),
        ("PUT", format!("/api/accounts/{deleted}/limit"), Some(json!({"limit": -1}))),
    ] {
        let (status, _) = send(&app, method, &uri, payload).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
    }
}

#[tokio::test]
async fn answers_500_when_the_store_is_unreachable() {
    let mut event_store = InMemoryEventStore::new();
    event_store.toggle_offline();
    let app = router(AppState::new(Arc::new(event_store)));

    let (status, body) = send(&app, "POST", "/api/accounts", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
}
