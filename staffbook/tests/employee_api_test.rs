#![cfg(all(feature = "derive", feature = "sqlite"))]
//! HTTP-level tests for `/api/employee` against an in-memory SQLite database
use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{send, setup_test_app, setup_test_db};

const ADA: &str = r#"{
    "name": "Ada",
    "lastName": "Lovelace",
    "age": 36,
    "address": "12 St James's Square",
    "cel": "5512345678",
    "email": "ada@example.com"
}"#;

#[tokio::test]
async fn test_create_returns_created_output() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, body) = send(&app, "POST", "/api/employee", Some(ADA)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"name": "Ada", "lastName": "Lovelace", "age": 36, "email": "ada@example.com"})
    );
}

#[tokio::test]
async fn test_list_omits_null_fields() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, body) = send(&app, "GET", "/api/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let payload = r#"{"name":"Grace","lastName":"Hopper","email":"grace@navy.mil"}"#;
    send(&app, "POST", "/api/employee", Some(ADA)).await;
    send(&app, "POST", "/api/employee", Some(payload)).await;

    let (status, body) = send(&app, "GET", "/api/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["email"], "ada@example.com");
    assert_eq!(list[1]["name"], "Grace");
    assert!(list[1].get("age").is_none());
}

#[tokio::test]
async fn test_put_replaces_and_patch_merges() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);
    send(&app, "POST", "/api/employee", Some(ADA)).await;

    // PUT without age: age becomes null
    let put = r#"{"id":1,"name":"Augusta","lastName":"King","email":"augusta@example.com"}"#;
    let (status, body) = send(&app, "PUT", "/api/employee/1", Some(put)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (_, body) = send(&app, "GET", "/api/employee", None).await;
    assert_eq!(
        body,
        json!([{"name": "Augusta", "lastName": "King", "email": "augusta@example.com"}])
    );

    // PATCH with only a name: everything else is kept
    let (status, _) = send(&app, "PATCH", "/api/employee/1", Some(r#"{"name":"Ada"}"#)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/api/employee", None).await;
    assert_eq!(body[0]["name"], "Ada");
    assert_eq!(body[0]["lastName"], "King");
    assert_eq!(body[0]["email"], "augusta@example.com");
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);
    send(&app, "POST", "/api/employee", Some(ADA)).await;

    let (status, _) = send(&app, "DELETE", "/api/employee/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", "/api/employee/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Employee with key '1' was not found.");
    assert!(body["traceId"].is_string());
}

#[tokio::test]
async fn test_patch_unknown_employee_is_404() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, body) = send(&app, "PATCH", "/api/employee/42", Some("{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee with key '42' was not found.");
}

#[tokio::test]
async fn test_non_integer_id_is_404_with_error_body() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, body) = send(&app, "DELETE", "/api/employee/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        "Route with key '/api/employee/abc' was not found."
    );
    assert!(body["traceId"].is_string());

    let (status, body) = send(&app, "PATCH", "/api/employee/1.5", Some(r#"{"age":40}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_put_id_mismatch_is_400() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);
    send(&app, "POST", "/api/employee", Some(ADA)).await;

    let put = r#"{"id":2,"name":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#;
    let (status, body) = send(&app, "PUT", "/api/employee/1", Some(put)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Route id and body id do not match.");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_409() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, _) = send(&app, "POST", "/api/employee", Some(ADA)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/employee", Some(ADA)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already exists.");
    assert_eq!(body["errors"], json!({"email": ["Email already exists."]}));

    // Taking another employee's email through PATCH conflicts too
    let other = r#"{"name":"Grace","lastName":"Hopper","email":"grace@navy.mil"}"#;
    send(&app, "POST", "/api/employee", Some(other)).await;
    let (status, _) = send(
        &app,
        "PATCH",
        "/api/employee/2",
        Some(r#"{"email":"ada@example.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, body) = send(&app, "POST", "/api/employee", Some(r#"{"name": "Ada""#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Malformed JSON.");
    assert_eq!(body["errors"], json!({"body": ["Malformed JSON."]}));

    // Wrong JSON type for a field
    let (status, body) = send(&app, "POST", "/api/employee", Some(r#"{"age": "old"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Malformed JSON.");
}

#[tokio::test]
async fn test_missing_content_type_is_400() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let (status, body) = send(&app, "POST", "/api/employee", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request.");
    assert!(body["errors"]["request"].is_array());
}

#[tokio::test]
async fn test_validation_errors_are_listed_per_field() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(db);

    let payload = r#"{"lastName":"Lovelace","age":130,"cel":"123","email":"nope"}"#;
    let (status, body) = send(&app, "POST", "/api/employee", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed.");
    assert_eq!(body["errors"]["name"], json!(["Name is required."]));
    assert_eq!(
        body["errors"]["age"],
        json!(["Age must be between 0 and 120."])
    );
    assert_eq!(
        body["errors"]["cel"],
        json!(["The cell phone number must have exactly 10 digits."])
    );
    assert_eq!(
        body["errors"]["email"],
        json!(["The email address is not in a valid format."])
    );

    let (_, body) = send(&app, "GET", "/api/employee", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let (_, openapi) = staffbook::app::router(staffbook::app::state(db));
    let paths: Vec<&String> = openapi.paths.paths.keys().collect();
    assert!(paths.iter().any(|path| path.starts_with("/api/employee")));
    assert!(paths.iter().any(|path| path.ends_with("{id}")));
}
