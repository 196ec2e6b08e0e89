#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use workout_api::db::{create_memory_pool, DbPool};
use workout_api::models::{Exercise, User};
use workout_api::repositories::{
    ExerciseRepository, SqliteExerciseRepository, SqliteUserRepository, UserRepository,
};
use workout_api::schema::create_schema;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    create_schema(&pool).expect("Failed to create schema");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    workout_api::routes::app(pool)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

// Test data creation helpers
pub async fn create_test_user(pool: &DbPool, name: &str, email: &str) -> User {
    let user_repo = SqliteUserRepository::new(pool.clone());
    user_repo
        .create(&User {
            name: name.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
}

pub async fn create_test_exercise(pool: &DbPool, name: &str, muscle_group: &str) -> Exercise {
    let exercise_repo = SqliteExerciseRepository::new(pool.clone());
    exercise_repo
        .create(&Exercise {
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
}
