//! CRUD verb tests against a mocked backend.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use api::models::{Article, Event, Feedback, GalleryItem, Service};
use api::{ApiConfig, Session};
use store::{KeyValueStore, MemoryStore};

async fn authed_session(server: &MockServer) -> Session<MemoryStore> {
    let store = MemoryStore::new();
    store.set("access_token", "A".to_string()).await;
    store.set("refresh_token", "R".to_string()).await;
    store
        .set(
            "user_data",
            json!({ "id": "1", "email": "admin@ai-solutions.com" }).to_string(),
        )
        .await;
    let session = Session::new(ApiConfig::new(server.uri()), store);
    session.restore().await;
    session
}

fn sample_service(id: u32, name: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Something clever.",
        "image": "https://example.com/s.jpg",
        "features": ["One", "Two"],
        "created_at": created_at,
    })
}

/// Serves whatever the shared list currently holds.
struct ServeList(Arc<Mutex<Vec<Value>>>);

impl Respond for ServeList {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(self.0.lock().unwrap().clone())
    }
}

/// Assigns an id to the posted record and appends it to the shared list.
struct AppendToList(Arc<Mutex<Vec<Value>>>);

impl Respond for AppendToList {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut record: Value = serde_json::from_slice(&request.body).unwrap();
        record["id"] = json!(99);
        record["created_at"] = json!("2025-01-05T00:00:00Z");
        self.0.lock().unwrap().push(record.clone());
        ResponseTemplate::new(201).set_body_json(record)
    }
}

/// Removes one record from the shared list by trailing path segment.
struct RemoveFromList(Arc<Mutex<Vec<Value>>>);

impl Respond for RemoveFromList {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let url_path = request.url.path().trim_end_matches('/');
        let id = url_path.rsplit('/').next().unwrap_or_default();
        self.0
            .lock()
            .unwrap()
            .retain(|record| record["id"].to_string() != id);
        ResponseTemplate::new(204)
    }
}

#[tokio::test]
async fn test_fetch_orders_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Old",
                "description": "d",
                "image": "i",
                "author": "a",
                "publish_date": "2024-01-01",
                "read_time": "5 min read",
                "category": "Technology",
            },
            {
                "id": 2,
                "title": "New",
                "description": "d",
                "image": "i",
                "author": "a",
                "publish_date": "2024-06-01",
                "read_time": "5 min read",
                "category": "Technology",
            },
        ])))
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    let articles: Vec<Article> = session.fetch().await.unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "New");
    assert_eq!(articles[1].title, "Old");
}

#[tokio::test]
async fn test_fetch_accepts_paginated_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [sample_service(1, "NLP", "2024-11-01T00:00:00Z")],
        })))
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    let services: Vec<Service> = session.fetch().await.unwrap();

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "NLP");
}

#[tokio::test]
async fn test_update_puts_to_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/events/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    let payload = json!({
        "title": "Renamed Summit",
        "event_type": "upcoming",
    });
    session.update::<Event>("7", &payload).await.unwrap();
}

#[tokio::test]
async fn test_patch_sends_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/feedback/3/"))
        .and(body_json(json!({ "approved": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    session
        .patch::<Feedback>("3", &json!({ "approved": true }))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_then_refetch_includes_record_once() {
    let server = MockServer::start().await;
    let records = Arc::new(Mutex::new(vec![sample_service(
        1,
        "Chatbots",
        "2024-11-01T00:00:00Z",
    )]));
    Mock::given(method("GET"))
        .and(path("/services/"))
        .respond_with(ServeList(records.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/"))
        .respond_with(AppendToList(records.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    let before: Vec<Service> = session.fetch().await.unwrap();
    assert_eq!(before.len(), 1);

    let payload = json!({
        "name": "Forecasting",
        "description": "Predict things.",
        "image": "https://example.com/f.jpg",
        "features": ["Trends"],
    });
    session.insert::<Service>(&payload).await.unwrap();

    let after: Vec<Service> = session.fetch().await.unwrap();
    assert_eq!(after.len(), 2);
    assert_eq!(after.iter().filter(|s| s.id == "99").count(), 1);
}

#[tokio::test]
async fn test_delete_then_refetch_excludes_record() {
    let server = MockServer::start().await;
    let records = Arc::new(Mutex::new(vec![
        json!({
            "id": 1,
            "filename": "one.jpg",
            "image": "https://example.com/1.jpg",
            "category": "Events",
            "upload_date": "2024-11-20",
            "description": "",
        }),
        json!({
            "id": 2,
            "filename": "two.jpg",
            "image": "https://example.com/2.jpg",
            "category": "Team",
            "upload_date": "2024-11-18",
            "description": "",
        }),
    ]));
    Mock::given(method("GET"))
        .and(path("/gallery/"))
        .respond_with(ServeList(records.clone()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/gallery/1/"))
        .respond_with(RemoveFromList(records.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    session.remove::<GalleryItem>("1").await.unwrap();

    let left: Vec<GalleryItem> = session.fetch().await.unwrap();
    assert_eq!(left.len(), 1);
    assert!(left.iter().all(|g| g.id != "1"));
}

/// Applies the posted `approved` value to the shared record.
struct StoreApproved(Arc<Mutex<Value>>);

impl Respond for StoreApproved {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let mut record = self.0.lock().unwrap();
        record["approved"] = body["approved"].clone();
        ResponseTemplate::new(200).set_body_json(record.clone())
    }
}

#[tokio::test]
async fn test_approving_twice_is_idempotent() {
    let server = MockServer::start().await;
    let record = Arc::new(Mutex::new(json!({
        "id": 3,
        "name": "Sarah",
        "email": "sarah@medtech.com",
        "company": "MedTech",
        "rating": 5,
        "review": "Great.",
        "approved": false,
        "created_at": "2024-11-15T10:30:00Z",
    })));
    Mock::given(method("PATCH"))
        .and(path("/feedback/3/"))
        .respond_with(StoreApproved(record.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    let body = json!({ "approved": true });

    session.patch::<Feedback>("3", &body).await.unwrap();
    let first = record.lock().unwrap().clone();

    session.patch::<Feedback>("3", &body).await.unwrap();
    let second = record.lock().unwrap().clone();

    assert_eq!(first["approved"], json!(true));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_approved_feedback_asks_backend_and_rechecks() {
    let server = MockServer::start().await;
    // This backend ignores the query parameter and returns everything
    Mock::given(method("GET"))
        .and(path("/feedback/"))
        .and(query_param("approved", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "Sarah",
                "email": "sarah@medtech.com",
                "company": "MedTech",
                "rating": 5,
                "review": "Great.",
                "approved": true,
                "created_at": "2024-11-15T10:30:00Z",
            },
            {
                "id": 2,
                "name": "Pending Pat",
                "email": "pat@example.com",
                "company": "",
                "rating": 3,
                "review": "Waiting.",
                "approved": false,
                "created_at": "2024-11-16T10:30:00Z",
            },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let session = authed_session(&server).await;
    let visible = session.fetch_approved_feedback().await.unwrap();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Sarah");
}
