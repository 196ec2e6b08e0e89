//! Storage contracts for users and exercises.
//!
//! Lookups by key never report "not found" as an error: when nothing matches
//! they return the entity's default value, whose `is_absent()` is true.
//! `update` and `delete` succeed without effect when the id has no row.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::models::{Exercise, User};

pub mod exercise_repo;
pub mod user_repo;

pub use exercise_repo::SqliteExerciseRepository;
pub use user_repo::SqliteUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Storage assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, user: &User) -> StorageResult<User>;

    async fn get_by_id(&self, id: i64) -> StorageResult<User>;

    async fn get_by_email(&self, email: &str) -> StorageResult<User>;

    async fn get_all(&self) -> StorageResult<Vec<User>>;

    /// Replace name, email and password of the row with `user.id`.
    async fn update(&self, user: &User) -> StorageResult<()>;

    async fn delete(&self, id: i64) -> StorageResult<()>;
}

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist a new exercise. Storage assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, exercise: &Exercise) -> StorageResult<Exercise>;

    async fn get_by_id(&self, id: i64) -> StorageResult<Exercise>;

    async fn get_all(&self) -> StorageResult<Vec<Exercise>>;

    /// Possibly empty; an unknown group is not an error.
    async fn get_by_muscle_group(&self, muscle_group: &str) -> StorageResult<Vec<Exercise>>;

    /// Replace every mutable field of the row with `exercise.id` and refresh `updated_at`.
    async fn update(&self, exercise: &Exercise) -> StorageResult<()>;

    async fn delete(&self, id: i64) -> StorageResult<()>;
}
