//! Router-level tests.
//!
//! Every request goes through the full axum router with a `MockGateway`
//! behind it, so no database is required.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use db::mock::MockGateway;
use db::Operation;

use crate::{router, AppState};

fn app() -> (Router, Arc<MockGateway>) {
    let (pool, mock) = MockGateway::pool();
    (router(AppState { pool }), mock)
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("body should be JSON")
}

// ============================================================
// GET /api/forms/{id}
// ============================================================

#[tokio::test]
async fn lookup_returns_the_matching_row_as_a_flat_object() {
    let (app, mock) = app();
    mock.push_ok(json!([{ "id": "f1", "title": "Feedback", "icon": null }]));

    let (status, body) = send(app, "GET", "/api/forms/f1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({ "id": "f1", "title": "Feedback", "icon": null })
    );
    assert_eq!(
        mock.operations(),
        vec![Operation::find_by_id("typiform", "forms", "f1")]
    );
}

#[tokio::test]
async fn lookup_of_unknown_id_answers_200_with_null_body() {
    let (app, mock) = app();
    mock.push_ok(json!([]));

    let (status, body) = send(app, "GET", "/api/forms/missing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"null");
}

#[tokio::test]
async fn non_get_lookup_is_rejected_without_querying() {
    for method in ["HEAD", "POST", "PUT", "PATCH", "DELETE"] {
        let (app, mock) = app();

        let (status, body) = send(app, method, "/api/forms/f1").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert!(body.is_empty(), "{method} body should be empty");
        assert_eq!(mock.call_count(), 0, "{method} must not reach the gateway");
    }
}

#[tokio::test]
async fn quoted_id_is_looked_up_as_a_literal_value() {
    let (app, mock) = app();
    mock.push_ok(json!([]));

    // x' OR '1'='1
    let (status, body) = send(app, "GET", "/api/forms/x%27%20OR%20%271%27%3D%271").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"null");
    assert_eq!(
        mock.operations(),
        vec![Operation::find_by_id("typiform", "forms", "x' OR '1'='1")]
    );
}

#[tokio::test]
async fn gateway_failure_maps_to_bad_gateway() {
    let (app, mock) = app();
    mock.push_gateway_error(500, "internal");

    let (status, _) = send(app, "GET", "/api/forms/f1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn malformed_gateway_reply_maps_to_bad_gateway() {
    let (app, mock) = app();
    mock.push_ok(json!({ "message": "not rows" }));

    let (status, _) = send(app, "GET", "/api/forms/f1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// ============================================================
// DELETE /api/forms/{id}/delete
// ============================================================

#[tokio::test]
async fn delete_answers_no_content() {
    let (app, mock) = app();
    mock.push_ok(json!({
        "message": "1 of 1 record successfully deleted",
        "deleted_hashes": ["f1"],
        "skipped_hashes": [],
    }));

    let (status, body) = send(app, "DELETE", "/api/forms/f1/delete").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(
        mock.operations(),
        vec![Operation::delete_by_id("typiform", "forms", "f1")]
    );
}

#[tokio::test]
async fn delete_of_unknown_form_is_not_found() {
    let (app, mock) = app();
    mock.push_ok(json!({
        "message": "0 of 1 record successfully deleted",
        "deleted_hashes": [],
        "skipped_hashes": ["ghost"],
    }));

    let (status, _) = send(app, "DELETE", "/api/forms/ghost/delete").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_route_only_accepts_delete() {
    let (app, mock) = app();

    let (status, _) = send(app, "GET", "/api/forms/f1/delete").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(mock.call_count(), 0);
}

// ============================================================
// GET /api/forms/user/{user_id}
// ============================================================

#[tokio::test]
async fn user_listing_returns_every_owned_form() {
    let (app, mock) = app();
    mock.push_ok(json!([
        { "id": "a", "title": "One", "userId": "auth0|7" },
        { "id": "b", "title": "Two", "userId": "auth0|7" },
    ]));

    let (status, body) = send(app, "GET", "/api/forms/user/auth0%7C7").await;

    assert_eq!(status, StatusCode::OK);
    let forms = json_body(&body);
    assert_eq!(forms.as_array().unwrap().len(), 2);
    assert_eq!(forms[0]["id"], "a");
    assert_eq!(forms[1]["title"], "Two");
    assert_eq!(
        mock.operations(),
        vec![Operation::find_by_value("typiform", "forms", "userId", "auth0|7")]
    );
}

#[tokio::test]
async fn user_listing_echoes_null_columns() {
    let (app, mock) = app();
    mock.push_ok(json!([{ "id": "a", "title": null, "icon": null, "userId": "auth0|7" }]));

    let (status, body) = send(app, "GET", "/api/forms/user/auth0%7C7").await;

    assert_eq!(status, StatusCode::OK);
    let forms = json_body(&body);
    assert_eq!(forms[0]["title"], Value::Null);
    assert!(forms[0].as_object().unwrap().contains_key("title"));
    assert!(forms[0].as_object().unwrap().contains_key("icon"));
}

#[tokio::test]
async fn head_on_user_listing_is_rejected_without_querying() {
    let (app, mock) = app();

    let (status, body) = send(app, "HEAD", "/api/forms/user/auth0%7C7").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn form_named_user_cannot_be_deleted_through_the_router() {
    // `/api/forms/user/:user_id` shadows `/api/forms/:id/delete` for id "user".
    let (app, mock) = app();

    let (status, _) = send(app, "DELETE", "/api/forms/user/delete").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn health_check_is_ok() {
    let (app, _) = app();

    let (status, body) = send(app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}
