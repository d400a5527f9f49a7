//! Router-level tests exercising the full visitor and operator surfaces
//! against a real (temporary) SQLite store.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::util::ServiceExt;

use ozchat_core::ResponderConfig;
use ozchat_http::{AppState, create_router};
use ozchat_service::{ChatService, OperatorService, SessionService, SimulatedResponder};
use ozchat_storage::{ChatStore, Store};

const OPERATOR_TOKEN: &str = "test-operator-token";

fn test_router() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn ChatStore> =
        Arc::new(Store::new(&temp_dir.path().join("test.db")).unwrap());

    // A long delay keeps the simulated responder out of these tests;
    // its behavior is covered in the service crate.
    let config = ResponderConfig {
        replies: vec!["canned".to_owned()],
        min_delay: Duration::from_secs(60),
        max_delay: Duration::from_secs(60),
    };
    let responder = SimulatedResponder::new(Arc::clone(&store), config);

    let state = Arc::new(AppState {
        chat: ChatService::new(Arc::clone(&store), responder),
        sessions: SessionService::new(Arc::clone(&store)),
        operator: OperatorService::new(store),
        operator_token: Some(OPERATOR_TOKEN.to_owned()),
    });
    (create_router(state), temp_dir)
}

async fn send_json(router: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    do_request(router, request).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    do_request(router, request).await
}

async fn get_as_operator(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {OPERATOR_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    do_request(router, request).await
}

async fn post_as_operator(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {OPERATOR_TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    do_request(router, request).await
}

async fn do_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (router, _temp_dir) = test_router();
    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));
}

#[tokio::test]
async fn visitor_send_and_poll_round_trip() {
    let (router, _temp_dir) = test_router();

    let (status, body) =
        send_json(&router, "POST", "/api/session/create", json!({"sessionId": "s1"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessionId"], "s1");

    let (status, body) = send_json(
        &router,
        "POST",
        "/api/chat/send",
        json!({"sessionId": "s1", "message": "hello"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let message_id = body["messageId"].as_i64().unwrap();
    assert!(message_id > 0);
    assert!(body["response"].as_str().unwrap().contains("processing"));

    let (status, body) = get(&router, "/api/chat/history?sessionId=s1").await;
    assert_eq!(status, StatusCode::OK);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "user");
    assert_eq!(messages[0]["text"], "hello");
    assert_eq!(messages[0]["id"].as_i64().unwrap(), message_id);

    // Cursor at the last seen id yields nothing new.
    let uri = format!("/api/chat/new-messages?sessionId=s1&lastMessageId={message_id}");
    let (status, body) = get(&router, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["messages"].as_array().unwrap().is_empty());

    // Without a cursor the poll returns the full history.
    let (_, body) = get(&router, "/api/chat/new-messages?sessionId=s1").await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_session_generates_token_when_none_given() {
    let (router, _temp_dir) = test_router();
    let (status, body) = send_json(&router, "POST", "/api/session/create", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["sessionId"].as_str().unwrap();
    assert!(id.starts_with("session_"));
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let (router, _temp_dir) = test_router();
    let (status, body) = send_json(
        &router,
        "POST",
        "/api/chat/send",
        json!({"sessionId": "s1", "message": "  "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn admin_routes_require_the_operator_token() {
    let (router, _temp_dir) = test_router();

    let (status, body) = get(&router, "/api/admin/sessions").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));

    let request = Request::builder()
        .uri("/api/admin/sessions")
        .header(header::AUTHORIZATION, "Bearer wrong-token")
        .body(Body::empty())
        .unwrap();
    let (status, _) = do_request(&router, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get_as_operator(&router, "/api/admin/sessions").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn operator_inbox_and_agent_reply_flow() {
    let (router, _temp_dir) = test_router();

    send_json(
        &router,
        "POST",
        "/api/chat/send",
        json!({"sessionId": "s1", "message": "is anyone there?"}),
    )
    .await;

    let (status, body) = get_as_operator(&router, "/api/admin/pending").await;
    assert_eq!(status, StatusCode::OK);
    let pending = body["pending"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["sessionId"], "s1");
    assert_eq!(pending[0]["needsResponse"], json!(true));

    let (status, body) = post_as_operator(
        &router,
        "/api/admin/respond",
        json!({"sessionId": "s1", "message": "yes, I am fully automated"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["messageId"].as_i64().unwrap() > 0);

    // The visitor sees an "ai" message, indistinguishable from the timer's.
    let (_, body) = get(&router, "/api/chat/new-messages?sessionId=s1&lastMessageId=0").await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1]["sender"], "ai");

    // Answered now: the inbox no longer flags it.
    let (_, body) = get_as_operator(&router, "/api/admin/pending").await;
    assert_eq!(body["pending"][0]["needsResponse"], json!(false));
}

#[tokio::test]
async fn admin_reply_uses_the_open_admin_role() {
    let (router, _temp_dir) = test_router();

    send_json(&router, "POST", "/api/chat/send", json!({"sessionId": "s1", "message": "hi"}))
        .await;
    post_as_operator(
        &router,
        "/api/admin/send-message",
        json!({"sessionId": "s1", "message": "admin here"}),
    )
    .await;

    let (_, body) = get_as_operator(&router, "/api/admin/chat-history?sessionId=s1").await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages[1]["sender"], "admin");
}

#[tokio::test]
async fn ended_session_leaves_listing_but_keeps_history() {
    let (router, _temp_dir) = test_router();

    send_json(&router, "POST", "/api/chat/send", json!({"sessionId": "s1", "message": "hi"}))
        .await;

    let (status, body) =
        post_as_operator(&router, "/api/admin/end-session", json!({"sessionId": "s1"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (_, body) = get_as_operator(&router, "/api/admin/sessions").await;
    assert!(body["sessions"].as_array().unwrap().is_empty());
    assert_eq!(body["stats"]["totalSessions"].as_u64().unwrap(), 1);

    let (_, body) = get(&router, "/api/chat/history?sessionId=s1").await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn ending_unknown_session_is_not_found() {
    let (router, _temp_dir) = test_router();
    let (status, body) =
        post_as_operator(&router, "/api/admin/end-session", json!({"sessionId": "ghost"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}
