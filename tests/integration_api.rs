//! HTTP API integration tests over the in-memory gateways

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

mod common;

use common::{memory_app, send};

fn messages(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .map(|errors| errors.iter().filter_map(|e| e["message"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_health_check() {
    let app = memory_app();

    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, "OK");
}

#[tokio::test]
async fn test_category_lifecycle() {
    let app = memory_app();

    // 1. Create
    let response = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({"name": "Filmes", "description": "A categoria mais assistida"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.json["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 32);
    assert_eq!(
        response.headers["location"].to_str().unwrap(),
        format!("/api/v1/categories/{}", id)
    );

    // 2. Read
    let uri = format!("/api/v1/categories/{}", id);
    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["name"], "Filmes");
    assert_eq!(response.json["description"], "A categoria mais assistida");
    assert_eq!(response.json["is_active"], true);
    assert!(response.json["deleted_at"].is_null());

    // 3. Deactivate
    let response = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"name": "Filmes", "is_active": false})),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["id"], id.as_str());

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.json["is_active"], false);
    assert!(response.json["description"].is_null());
    assert!(!response.json["deleted_at"].is_null());

    // 4. Delete twice
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["error_code"], "not_found");
    assert_eq!(
        response.json["error"],
        format!("Category with ID {} was not found", id)
    );
}

#[tokio::test]
async fn test_create_category_without_name() {
    let app = memory_app();

    let response = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({"description": "sem nome"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json["error_code"], "validation_error");
    assert_eq!(response.json["error"], "Could not create Aggregate Category");
    assert_eq!(messages(&response.json), vec!["'name' should not be null"]);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_request() {
    let app = memory_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/categories")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_categories_search_and_paging() {
    let app = memory_app();
    for name in ["Filmes", "Documentários", "Séries", "Anime"] {
        let response = send(
            &app,
            Method::POST,
            "/api/v1/categories",
            Some(json!({ "name": name })),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = send(
        &app,
        Method::GET,
        "/api/v1/categories?search=S&perPage=2&sort=name&dir=desc",
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["current_page"], 0);
    assert_eq!(response.json["per_page"], 2);
    assert_eq!(response.json["total"], 3);
    let names: Vec<&str> = response.json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Séries", "Filmes"]);

    let response = send(
        &app,
        Method::GET,
        "/api/v1/categories?search=S&perPage=2&page=1&sort=name&dir=desc",
        None,
    )
    .await;
    assert_eq!(response.json["items"][0]["name"], "Documentários");
}

#[tokio::test]
async fn test_list_with_unknown_direction() {
    let app = memory_app();

    let response = send(&app, Method::GET, "/api/v1/genres?dir=sideways", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_genre_with_missing_category() {
    let app = memory_app();
    let response = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({"name": "Filmes"})),
    )
    .await;
    let category_id = response.json["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "Ação", "categories_id": [category_id, "B"]})),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        messages(&response.json),
        vec!["Some categories could not be found: B"]
    );

    let response = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "", "categories_id": ["B"]})),
    )
    .await;
    assert_eq!(
        messages(&response.json),
        vec![
            "Some categories could not be found: B",
            "'name' should not be empty",
        ]
    );

    let response = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "Ação", "categories_id": [category_id]})),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let genre_id = response.json["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::GET,
        &format!("/api/v1/genres/{}", genre_id),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["name"], "Ação");
    assert_eq!(response.json["categories_id"], json!([category_id]));
}

#[tokio::test]
async fn test_unknown_genre() {
    let app = memory_app();

    let response = send(&app, Method::GET, "/api/v1/genres/123", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["error"], "Genre with ID 123 was not found");

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/genres/123",
        Some(json!({"name": "Ação"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cast_member_update_is_all_or_nothing() {
    let app = memory_app();
    let response = send(
        &app,
        Method::POST,
        "/api/v1/cast_members",
        Some(json!({"name": "Vin Diesel", "type": "ACTOR"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let uri = format!("/api/v1/cast_members/{}", response.json["id"].as_str().unwrap());

    let response = send(&app, Method::PUT, &uri, Some(json!({"type": "DIRECTOR"}))).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json["error"], "Could not update Aggregate CastMember");
    assert_eq!(messages(&response.json), vec!["'name' should not be null"]);

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.json["name"], "Vin Diesel");
    assert_eq!(response.json["type"], "ACTOR");
}

#[tokio::test]
async fn test_cast_member_field_errors() {
    let app = memory_app();

    let response = send(&app, Method::POST, "/api/v1/cast_members", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        messages(&response.json),
        vec!["'name' should not be null", "'type' should not be null"]
    );

    let response = send(
        &app,
        Method::POST,
        "/api/v1/cast_members",
        Some(json!({"name": "Vin Diesel", "type": "PRODUCER"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_correlation_id_is_echoed() {
    let app = memory_app();
    let correlation_id = uuid::Uuid::new_v4().to_string();

    let request = Request::builder()
        .uri("/api/v1/cast_members")
        .header("x-correlation-id", &correlation_id)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-correlation-id"].to_str().unwrap(),
        correlation_id
    );
}
