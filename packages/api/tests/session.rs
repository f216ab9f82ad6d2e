//! Token lifecycle tests against a mocked backend.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use api::models::Event;
use api::{ApiConfig, ApiError, Session};
use store::{KeyValueStore, MemoryStore};

fn session_for(server: &MockServer) -> (Session<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    let session = Session::new(ApiConfig::new(server.uri()), store.clone());
    (session, store)
}

async fn seed_tokens(store: &MemoryStore, access: &str, refresh: Option<&str>) {
    store.set("access_token", access.to_string()).await;
    if let Some(refresh) = refresh {
        store.set("refresh_token", refresh.to_string()).await;
    }
    store
        .set(
            "user_data",
            json!({ "id": "1", "email": "admin@ai-solutions.com" }).to_string(),
        )
        .await;
}

fn sample_event(id: u32, date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "AI Summit",
        "description": "A summit.",
        "image": "https://example.com/e.jpg",
        "date": date,
        "time": "09:00 AM",
        "location": "San Francisco",
        "event_type": "upcoming",
        "max_attendees": 100,
        "registration_link": "#",
        "created_at": "2024-12-01T00:00:00Z",
    })
}

/// Matches requests that carry no Authorization header at all.
struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

#[tokio::test]
async fn test_login_stores_tokens_and_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({
            "username": "sarah@medtech.com",
            "password": "hunter2",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access": "A", "refresh": "R" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    assert!(session.login("sarah@medtech.com", "hunter2").await);

    let user = session.user().unwrap();
    assert_eq!(user.email, "sarah@medtech.com");

    assert_eq!(store.get("access_token").await.as_deref(), Some("A"));
    assert_eq!(store.get("refresh_token").await.as_deref(), Some("R"));
    let raw = store.get("user_data").await.unwrap();
    assert!(raw.contains("sarah@medtech.com"));
}

#[tokio::test]
async fn test_login_failure_leaves_state_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    assert!(!session.login("sarah@medtech.com", "wrong").await);

    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
    assert!(store.get("access_token").await.is_none());
    assert!(store.get("refresh_token").await.is_none());
}

#[tokio::test]
async fn test_restore_recovers_persisted_session() {
    let store = MemoryStore::new();
    seed_tokens(&store, "A", Some("R")).await;

    let session = Session::new(ApiConfig::new("http://127.0.0.1:1"), store);
    let user = session.restore().await.unwrap();

    assert_eq!(user.email, "admin@ai-solutions.com");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_restore_without_access_token_is_signed_out() {
    let store = MemoryStore::new();
    // A user record alone, with no access token, is a stale leftover
    store
        .set(
            "user_data",
            json!({ "id": "1", "email": "admin@ai-solutions.com" }).to_string(),
        )
        .await;

    let session = Session::new(ApiConfig::new("http://127.0.0.1:1"), store);
    assert!(session.restore().await.is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access": "A", "refresh": "R" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("authorization", "Bearer A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (session, _store) = session_for(&server);
    assert!(session.login("sarah@medtech.com", "hunter2").await);

    let events: Vec<Event> = session.fetch().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_401_refreshes_once_and_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    // The refresh call must not inherit the stale bearer header
    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .and(body_json(json!({ "refresh": "R" })))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "fresh" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_event(1, "2025-02-15")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    seed_tokens(&store, "stale", Some("R")).await;
    session.restore().await;

    let events: Vec<Event> = session.fetch().await.unwrap();
    assert_eq!(events.len(), 1);

    // The renewed access token is persisted
    assert_eq!(store.get("access_token").await.as_deref(), Some("fresh"));
    assert!(session.user().is_some());
}

#[tokio::test]
async fn test_refresh_failure_tears_session_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token is invalid or expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    seed_tokens(&store, "stale", Some("expired")).await;
    session.restore().await;

    let result: Result<Vec<Event>, ApiError> = session.fetch().await;
    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);

    assert!(session.user().is_none());
    assert!(store.get("access_token").await.is_none());
    assert!(store.get("refresh_token").await.is_none());
    assert!(store.get("user_data").await.is_none());
}

#[tokio::test]
async fn test_401_without_refresh_token_tears_session_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    seed_tokens(&store, "stale", None).await;
    session.restore().await;

    let result: Result<Vec<Event>, ApiError> = session.fetch().await;
    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    assert!(store.get("user_data").await.is_none());
}

#[tokio::test]
async fn test_second_401_gives_up_without_looping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "fresh" })))
        .expect(1)
        .mount(&server)
        .await;
    // Even the fresh token is refused; exactly one retry may happen
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    seed_tokens(&store, "stale", Some("R")).await;
    session.restore().await;

    let result: Result<Vec<Event>, ApiError> = session.fetch().await;
    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    assert!(store.get("access_token").await.is_none());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access": "A", "refresh": "R" })),
        )
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    assert!(session.login("sarah@medtech.com", "hunter2").await);

    session.logout().await;
    session.logout().await;

    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
    assert!(store.get("access_token").await.is_none());
}

#[tokio::test]
async fn test_non_401_rejection_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    let (session, store) = session_for(&server);
    seed_tokens(&store, "A", Some("R")).await;
    session.restore().await;

    let result: Result<Vec<Event>, ApiError> = session.fetch().await;
    match result.unwrap_err() {
        ApiError::Rejected { status, detail } => {
            assert_eq!(status, 500);
            assert!(detail.contains("backend exploded"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    // A plain server error does not end the session
    assert!(session.user().is_some());
}
