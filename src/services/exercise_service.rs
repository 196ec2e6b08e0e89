//! Exercise service
//!
//! Validates ids and required fields before any repository call. The first
//! failing check determines the error.

use std::sync::Arc;

use crate::error::{ServiceError, ServiceResult};
use crate::models::Exercise;
use crate::repositories::ExerciseRepository;

const INVALID_ID: &str = "invalid exercise ID";
const NAME_REQUIRED: &str = "exercise name is required";
const MUSCLE_GROUP_REQUIRED: &str = "muscle group is required";
const MUSCLE_GROUP_EMPTY: &str = "muscle group cannot be empty";

#[derive(Clone)]
pub struct ExerciseService {
    repo: Arc<dyn ExerciseRepository>,
}

impl ExerciseService {
    pub fn new(repo: Arc<dyn ExerciseRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_exercise(&self, exercise: Exercise) -> ServiceResult<Exercise> {
        validate_fields(&exercise)?;
        let created = self.repo.create(&exercise).await?;
        tracing::info!("Created exercise {}", created.id);
        Ok(created)
    }

    pub async fn get_exercise_by_id(&self, id: i64) -> ServiceResult<Exercise> {
        validate_id(id)?;
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn get_all_exercises(&self) -> ServiceResult<Vec<Exercise>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_exercises_by_muscle_group(
        &self,
        muscle_group: &str,
    ) -> ServiceResult<Vec<Exercise>> {
        if muscle_group.is_empty() {
            return Err(rejected(MUSCLE_GROUP_EMPTY));
        }
        Ok(self.repo.get_by_muscle_group(muscle_group).await?)
    }

    /// Full replace of the mutable fields. An id with no row is not an error.
    pub async fn update_exercise(&self, exercise: Exercise) -> ServiceResult<()> {
        validate_id(exercise.id)?;
        validate_fields(&exercise)?;
        Ok(self.repo.update(&exercise).await?)
    }

    pub async fn delete_exercise(&self, id: i64) -> ServiceResult<()> {
        validate_id(id)?;
        Ok(self.repo.delete(id).await?)
    }
}

fn rejected(msg: &str) -> ServiceError {
    tracing::debug!("Rejected exercise input: {}", msg);
    ServiceError::validation(msg)
}

fn validate_id(id: i64) -> ServiceResult<()> {
    if id <= 0 {
        return Err(rejected(INVALID_ID));
    }
    Ok(())
}

fn validate_fields(exercise: &Exercise) -> ServiceResult<()> {
    if exercise.name.is_empty() {
        return Err(rejected(NAME_REQUIRED));
    }
    if exercise.muscle_group.is_empty() {
        return Err(rejected(MUSCLE_GROUP_REQUIRED));
    }
    Ok(())
}
