//! In-memory repository doubles for service tests.
//!
//! Each double records the name of every repository method it receives and
//! can be told to fail a given method with a storage error.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::error::{StorageError, StorageResult};
use crate::models::{Exercise, User};
use crate::repositories::{ExerciseRepository, UserRepository};

/// The error a double returns from a method configured with `fail_on`.
pub fn injected_error() -> StorageError {
    StorageError::Database(rusqlite::Error::InvalidQuery)
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<Option<&'static str>>,
}

impl Recorder {
    fn enter(&self, method: &'static str) -> StorageResult<()> {
        self.calls.lock().unwrap().push(method);
        if *self.failing.lock().unwrap() == Some(method) {
            return Err(injected_error());
        }
        Ok(())
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    recorder: Recorder,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored user
    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    pub fn fail_on(self, method: &'static str) -> Self {
        *self.recorder.failing.lock().unwrap() = Some(method);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.recorder.calls()
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> StorageResult<User> {
        self.recorder.enter("create")?;
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let stored = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            created_at: now,
            updated_at: now,
            ..user.clone()
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<User> {
        self.recorder.enter("get_by_id")?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned().unwrap_or_default())
    }

    async fn get_by_email(&self, email: &str) -> StorageResult<User> {
        self.recorder.enter("get_by_email")?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_all(&self) -> StorageResult<Vec<User>> {
        self.recorder.enter("get_all")?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, user: &User) -> StorageResult<()> {
        self.recorder.enter("update")?;
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            existing.name = user.name.clone();
            existing.email = user.email.clone();
            existing.password = user.password.clone();
            existing.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        self.recorder.enter("delete")?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

// ============================================================================
// Exercises
// ============================================================================

#[derive(Default)]
pub struct InMemoryExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
    recorder: Recorder,
}

impl InMemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exercise(self, exercise: Exercise) -> Self {
        self.exercises.lock().unwrap().push(exercise);
        self
    }

    pub fn fail_on(self, method: &'static str) -> Self {
        *self.recorder.failing.lock().unwrap() = Some(method);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.recorder.calls()
    }

    pub fn stored(&self) -> Vec<Exercise> {
        self.exercises.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn create(&self, exercise: &Exercise) -> StorageResult<Exercise> {
        self.recorder.enter("create")?;
        let mut exercises = self.exercises.lock().unwrap();
        let now = Utc::now();
        let stored = Exercise {
            id: exercises.iter().map(|e| e.id).max().unwrap_or(0) + 1,
            created_at: now,
            updated_at: now,
            ..exercise.clone()
        };
        exercises.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Exercise> {
        self.recorder.enter("get_by_id")?;
        let exercises = self.exercises.lock().unwrap();
        Ok(exercises
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_all(&self) -> StorageResult<Vec<Exercise>> {
        self.recorder.enter("get_all")?;
        Ok(self.exercises.lock().unwrap().clone())
    }

    async fn get_by_muscle_group(&self, muscle_group: &str) -> StorageResult<Vec<Exercise>> {
        self.recorder.enter("get_by_muscle_group")?;
        let exercises = self.exercises.lock().unwrap();
        Ok(exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .cloned()
            .collect())
    }

    async fn update(&self, exercise: &Exercise) -> StorageResult<()> {
        self.recorder.enter("update")?;
        let mut exercises = self.exercises.lock().unwrap();
        if let Some(existing) = exercises.iter_mut().find(|e| e.id == exercise.id) {
            *existing = Exercise {
                created_at: existing.created_at,
                updated_at: Utc::now(),
                ..exercise.clone()
            };
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        self.recorder.enter("delete")?;
        self.exercises.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn test_user(id: i64, email: &str) -> User {
    let now = Utc::now();
    User {
        id,
        name: "John Doe".to_string(),
        email: email.to_string(),
        password: "hashedpassword".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_exercise(id: i64, name: &str, muscle_group: &str) -> Exercise {
    let now = Utc::now();
    Exercise {
        id,
        name: name.to_string(),
        muscle_group: muscle_group.to_string(),
        equipment_type: Some("Bodyweight".to_string()),
        notes: None,
        created_at: now,
        updated_at: now,
    }
}
