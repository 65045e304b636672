//! HTTP-level tests against the router backed by the in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use employee_directory::AppState;
use employee_directory::api::create_router;

fn app() -> Router {
    create_router(AppState::in_memory())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
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

fn michael() -> Value {
    json!({
        "firstName": "Michael",
        "lastName": "Royf",
        "email": "michael@gmail.com"
    })
}

#[tokio::test]
async fn employee_lifecycle() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/v1/employee", Some(michael())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["firstName"], "Michael");
    assert_eq!(created["lastName"], "Royf");
    assert_eq!(created["email"], "michael@gmail.com");
    let id = created["id"].as_i64().expect("generated id");

    let (status, all) = send(&app, Method::GET, "/api/v1/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([created]));

    let (status, by_email) = send(&app, Method::GET, "/api/v1/employee/email/michael@gmail.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_email, created);

    let uri = format!("/api/v1/employee/id/{id}");
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({
            "firstName": "NewFirstName",
            "lastName": "NewLastName",
            "email": "other@gmail.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["firstName"], "NewFirstName");
    assert_eq!(updated["lastName"], "NewLastName");
    assert_eq!(updated["email"], "michael@gmail.com");

    let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], format!("Employee with id: {id} was deleted"));

    let (status, missing) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], format!("Employee with id: {id} not found"));
}

#[tokio::test]
async fn not_found_responses_carry_error_body() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/employee/id/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["httpStatusCode"], 404);
    assert_eq!(body["httpStatus"], "NOT_FOUND");
    assert_eq!(body["message"], "Employee with id: 999 not found");
    assert!(body["timestamp"].is_string());

    let (status, body) = send(&app, Method::GET, "/api/v1/employee/email/ghost@gmail.com", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee with email: ghost@gmail.com not found");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/employee/id/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/employee/id/999",
        Some(json!({"firstName": "A", "lastName": "B", "email": "a@b.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_reports_every_violation() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/employee",
        Some(json!({"lastName": "", "email": "not-an-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    let messages: Vec<&str> = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(messages.len(), 3);
    assert!(messages.contains(&"First name is required"));
    assert!(messages.contains(&"Last name must not be empty"));
    assert!(messages.contains(&"Email must be a valid email address"));

    let (_, all) = send(&app, Method::GET, "/api/v1/employee", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn non_numeric_id_is_a_type_mismatch() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/employee/id/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["httpStatus"], "BAD_REQUEST");
    assert_eq!(
        body["message"],
        "Failed to convert value of type 'String' to required type 'i64'; For input string: \"abc\""
    );
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/employee")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"firstName\":"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = app();

    let (status, _) = send(&app, Method::POST, "/api/v1/employee", Some(michael())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/api/v1/employee", Some(michael())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["httpStatus"], "CONFLICT");
    assert_eq!(body["message"], "Employee with email: michael@gmail.com already exists");

    let (_, all) = send(&app, Method::GET, "/api/v1/employee", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_route_uses_fallback() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No handler found for GET /api/v1/nothing");
}

#[tokio::test]
async fn health_reports_storage_backend() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me");

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_document_lists_employee_paths() {
    let app = app();

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/v1/employee"));
    assert!(paths.contains_key("/api/v1/employee/id/{id}"));
    assert!(paths.contains_key("/api/v1/employee/email/{email}"));
}
