use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::db::DbPool;
use crate::handlers::{exercises, health, users};
use crate::repositories::{SqliteExerciseRepository, SqliteUserRepository};
use crate::services::{ExerciseService, UserService};

pub fn create_router(
    health_state: health::HealthState,
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
) -> Router {
    Router::new()
        // Liveness
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // User routes
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", get(users::show).delete(users::delete))
        .with_state(users_state)
        // Exercise routes
        .route("/exercises", get(exercises::list).post(exercises::create))
        .route(
            "/exercises/{id}",
            get(exercises::show)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .with_state(exercises_state)
        .layer(TraceLayer::new_for_http())
}

/// Wire SQLite repositories into services and handler states.
pub fn app(pool: DbPool) -> Router {
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let exercise_repo = Arc::new(SqliteExerciseRepository::new(pool.clone()));

    create_router(
        health::HealthState { pool },
        users::UsersState {
            user_service: UserService::new(user_repo),
        },
        exercises::ExercisesState {
            exercise_service: ExerciseService::new(exercise_repo),
        },
    )
}
