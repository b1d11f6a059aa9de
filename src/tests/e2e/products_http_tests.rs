// End to end scenarios through the full router, the way a client drives the API.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shared::core::retry::RetryPolicy;
use crate::shared::infrastructure::cache::CacheConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    router(AppState::in_memory(CacheConfig::default(), RetryPolicy::default()).unwrap())
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };
    app.clone().oneshot(request.unwrap()).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, name: &str, stock_quantity: i64, threshold: i64) -> Value {
    let response = send(
        app,
        "POST",
        "/api/products",
        Some(json!({
            "name": name,
            "description": format!("{name} for the east wing"),
            "stockQuantity": stock_quantity,
            "lowStockThreshold": threshold
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

#[tokio::test]
async fn it_should_walk_a_product_through_its_lifecycle() {
    let app = app();
    let created = create(&app, "Crate", 10, 4).await;
    let path = format!("/api/products/{}", created["id"].as_str().unwrap());

    let fetched = send(&app, "GET", &path, None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched).await, created);

    let decreased = send(
        &app,
        "PATCH",
        &format!("{path}/decrease-stock"),
        Some(json!({ "quantity": 7 })),
    )
    .await;
    assert_eq!(decreased.status(), StatusCode::OK);
    let decreased = json_body(decreased).await;
    assert_eq!(decreased["stockQuantity"], 3);
    assert_eq!(decreased["version"], 1);

    let low = json_body(send(&app, "GET", "/api/products/low-stock", None).await).await;
    assert_eq!(low.as_array().unwrap().len(), 1);
    assert_eq!(low[0]["name"], "Crate");

    let updated = send(
        &app,
        "PUT",
        &path,
        Some(json!({ "name": "Crate", "stockQuantity": 40, "lowStockThreshold": 4 })),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(json_body(updated).await["version"], 2);

    let low = json_body(send(&app, "GET", "/api/products/low-stock", None).await).await;
    assert_eq!(low, json!([]));

    let deleted = send(&app, "DELETE", &path, None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let gone = send(&app, "GET", &path, None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_page_through_the_listing() {
    let app = app();
    for name in ["d", "a", "c", "b", "e"] {
        create(&app, name, 1, 0).await;
    }

    let first = json_body(send(&app, "GET", "/api/products?size=2&sort=name", None).await).await;
    let second =
        json_body(send(&app, "GET", "/api/products?page=2&size=2&sort=name", None).await).await;

    assert_eq!(first["content"][0]["name"], "a");
    assert_eq!(first["content"][1]["name"], "b");
    assert_eq!(first["totalElements"], 5);
    assert_eq!(first["totalPages"], 3);
    assert_eq!(second["content"].as_array().unwrap().len(), 1);
    assert_eq!(second["content"][0]["name"], "e");
}

#[tokio::test]
async fn it_should_reject_renaming_onto_an_existing_name() {
    let app = app();
    create(&app, "Crate", 1, 0).await;
    let bin = create(&app, "Bin", 1, 0).await;

    let response = send(
        &app,
        "PUT",
        &format!("/api/products/{}", bin["id"].as_str().unwrap()),
        Some(json!({ "name": "Crate", "stockQuantity": 1 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "product with name Crate already exists");
}

#[tokio::test]
async fn it_should_answer_unknown_and_malformed_ids() {
    let app = app();

    let unknown = send(
        &app,
        "PATCH",
        "/api/products/0192f0c1-8d3a-7c4e-9b21-6f1a2b3c4d5e/increase-stock",
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let malformed = send(&app, "DELETE", "/api/products/not-a-uuid", None).await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    let body = json_body(malformed).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["path"], "/api/products/not-a-uuid");
}
