//! HTTP-level tests for the listings REST API

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use listings::api::rest::routes;
use listings::config::Flags;
use listings::domain::Service;
use listings::infra::storage::InMemoryListingRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(repo: Arc<InMemoryListingRepository>, flags: Flags) -> Router {
    routes::router(Arc::new(Service::new(repo, Arc::new(flags))))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryListingRepository::new()), Flags::default())
}

async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_returns_201_with_location_matching_id() {
    let app = app();

    let response = request(
        &app,
        Method::POST,
        "/api/listings/",
        Some(json!({"name": "Rex"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body, json!({"id": 1, "name": "Rex"}));
    assert_eq!(location, "/api/listings/1");
}

#[tokio::test]
async fn post_get_delete_round_trip() {
    let app = app();

    let response = request(
        &app,
        Method::POST,
        "/api/listings/",
        Some(json!({"name": "Rex"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = request(&app, Method::GET, "/api/listings/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "Rex"}));

    let response = request(&app, Method::DELETE, "/api/listings/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = request(&app, Method::GET, "/api/listings/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_updates_and_get_reflects_the_change() {
    let app = app();

    request(
        &app,
        Method::POST,
        "/api/listings/",
        Some(json!({"name": "Rex"})),
    )
    .await;

    let response = request(
        &app,
        Method::PUT,
        "/api/listings/1",
        Some(json!({"name": "Rexy"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "Rexy"}));

    let response = request(&app, Method::GET, "/api/listings/1", None).await;
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "Rexy"}));
}

#[tokio::test]
async fn list_returns_array_in_id_order() {
    let app = app();

    for name in ["Rex", "Bella"] {
        request(
            &app,
            Method::POST,
            "/api/listings/",
            Some(json!({"name": name})),
        )
        .await;
    }

    let response = request(&app, Method::GET, "/api/listings/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            {"id": 1, "name": "Rex"},
            {"id": 2, "name": "Bella"}
        ])
    );
}

#[tokio::test]
async fn unknown_ids_return_404_problems() {
    let app = app();

    let response = request(&app, Method::GET, "/api/listings/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["title"], json!("Listing Not Found"));

    let response = request(
        &app,
        Method::PUT,
        "/api/listings/42",
        Some(json!({"name": "Rex"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = request(&app, Method::DELETE, "/api/listings/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = app();

    let response = request(
        &app,
        Method::POST,
        "/api/listings/",
        Some(json!({"id": 99, "name": "Rex"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "Rex"}));
}

#[tokio::test]
async fn disabled_crud_returns_503_and_leaves_state_unchanged() {
    let repo = Arc::new(InMemoryListingRepository::new());

    // seed through a router with writes enabled
    let writer = app_with(repo.clone(), Flags::default());
    request(
        &writer,
        Method::POST,
        "/api/listings/",
        Some(json!({"name": "Rex"})),
    )
    .await;

    let disabled = Flags {
        errors: false,
        enable_crud: false,
    };
    let app = app_with(repo.clone(), disabled);

    let response = request(
        &app,
        Method::POST,
        "/api/listings/",
        Some(json!({"name": "Bella"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!(503));
    assert_eq!(body["title"], json!("CRUD Operations Disabled"));

    let response = request(
        &app,
        Method::PUT,
        "/api/listings/1",
        Some(json!({"name": "Bella"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = request(&app, Method::DELETE, "/api/listings/1", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // reads still work and the seeded listing is intact
    assert_eq!(repo.len(), 1);
    let response = request(&app, Method::GET, "/api/listings/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "Rex"}));
}
