//! End-to-end scenarios against the assembled application.
//!
//! Each test drives the full actix app from `server::build_app` with a
//! fresh in-memory store injected, so scenarios exercise routing, extractor
//! configuration, CORS, and error mapping together.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use todo_backend::inbound::http::state::HttpState;
use todo_backend::outbound::memory::MemoryTodoStore;
use todo_backend::server::build_app;

fn fresh_state() -> HttpState {
    HttpState::new(Arc::new(MemoryTodoStore::new()))
}

async fn post_todo<S, B>(app: &S, payload: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = actix_test::TestRequest::post()
        .uri("/todos")
        .set_json(payload)
        .to_request();
    actix_test::call_service(app, request).await
}

fn timestamp(body: &Value, field: &str) -> DateTime<Utc> {
    body.get(field)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| panic!("missing {field} timestamp"))
}

#[actix_web::test]
async fn root_reports_liveness_payload() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let request = actix_test::TestRequest::get().uri("/").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Todo API is running" }));
}

#[actix_web::test]
async fn created_todo_is_retrievable_with_same_title() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let response = post_todo(&app, json!({ "title": "Buy milk" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(response).await;

    let id = created.get("id").and_then(Value::as_i64).expect("integer id");
    assert_eq!(
        created.get("completed").and_then(Value::as_bool),
        Some(false)
    );
    assert_eq!(
        timestamp(&created, "created_at"),
        timestamp(&created, "updated_at")
    );

    let request = actix_test::TestRequest::get()
        .uri(&format!("/todos/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        fetched.get("title").and_then(Value::as_str),
        Some("Buy milk")
    );
}

#[actix_web::test]
async fn updating_unknown_id_reports_not_found_detail() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let request = actix_test::TestRequest::put()
        .uri("/todos/99999")
        .set_json(json!({ "title": "x" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "detail": "Todo not found" }));
}

#[actix_web::test]
async fn deleted_todo_stops_resolving() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let created: Value =
        actix_test::read_body_json(post_todo(&app, json!({ "title": "Buy milk" })).await).await;
    let id = created.get("id").and_then(Value::as_i64).expect("id");

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/todos/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(actix_test::read_body(response).await.is_empty());

    let request = actix_test::TestRequest::get()
        .uri(&format!("/todos/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_title_is_unprocessable() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let response = post_todo(&app, json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body.get("detail").is_some());
}

#[actix_web::test]
async fn listing_grows_with_creates_and_keeps_ids_distinct() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let request = actix_test::TestRequest::get().uri("/todos").to_request();
    let empty: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    assert_eq!(empty.as_array().map(Vec::len), Some(0));

    for title in ["one", "two", "three"] {
        let response = post_todo(&app, json!({ "title": title })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = actix_test::TestRequest::get().uri("/todos").to_request();
    let listed: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    let todos = listed.as_array().expect("array body");
    assert_eq!(todos.len(), 3);

    let mut ids: Vec<i64> = todos
        .iter()
        .map(|todo| todo.get("id").and_then(Value::as_i64).expect("id"))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[actix_web::test]
async fn empty_update_body_still_refreshes_updated_at() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let created: Value =
        actix_test::read_body_json(post_todo(&app, json!({ "title": "Buy milk" })).await).await;
    let id = created.get("id").and_then(Value::as_i64).expect("id");

    let request = actix_test::TestRequest::put()
        .uri(&format!("/todos/{id}"))
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        updated.get("title").and_then(Value::as_str),
        Some("Buy milk")
    );
    assert!(timestamp(&updated, "updated_at") >= timestamp(&created, "updated_at"));
    assert_eq!(
        timestamp(&updated, "created_at"),
        timestamp(&created, "created_at")
    );
}

#[actix_web::test]
async fn preflight_allows_the_development_ui_origin() {
    let app = actix_test::init_service(build_app(fresh_state())).await;

    let request = actix_test::TestRequest::with_uri("/todos")
        .method(actix_web::http::Method::OPTIONS)
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert!(response.status().is_success());
    let allowed = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|value| value.to_str().ok());
    assert_eq!(allowed, Some("http://localhost:3000"));
}
