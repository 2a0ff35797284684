//! Common test utilities

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{Executor, PgPool};
use tower::util::ServiceExt;

use catalog_admin::api::{self, AppState};
use catalog_admin::db;

/// Router over fresh in-memory gateways
pub fn memory_app() -> Router {
    api::build_router(AppState::in_memory())
}

/// Response pieces the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request through the router.
///
/// Empty bodies decode to `Null`, non-JSON bodies to a string.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Connect to the test database and apply the schema.
///
/// Returns `None` when `DATABASE_URL` is unset so the caller can skip.
pub async fn setup_test_db() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let pool = db::connect(&database_url, 5)
        .await
        .expect("Failed to connect to DB");

    // Tests run in parallel; serialize the DDL behind an advisory lock.
    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    sqlx::query("SELECT pg_advisory_xact_lock(7301)")
        .execute(&mut *tx)
        .await
        .expect("Failed to take schema lock");
    (&mut *tx)
        .execute(include_str!("../../migrations/0001_catalog.sql"))
        .await
        .expect("Failed to apply schema");
    tx.commit().await.expect("Failed to commit schema");

    assert!(db::check_schema(&pool).await.unwrap());
    Some(pool)
}

/// Suffix that keeps rows of concurrent tests apart
pub fn unique_tag() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
