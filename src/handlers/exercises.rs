use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::parse_id;
use crate::error::{AppError, Result};
use crate::models::{CreateExercise, UpdateExercise};
use crate::services::ExerciseService;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_service: ExerciseService,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub muscle_group: Option<String>,
}

const INVALID_EXERCISE_ID: &str = "invalid exercise ID";

pub async fn create(
    State(state): State<ExercisesState>,
    payload: std::result::Result<Json<CreateExercise>, JsonRejection>,
) -> Result<Response> {
    let Json(form) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let exercise = state.exercise_service.create_exercise(form.into()).await?;

    Ok((StatusCode::CREATED, Json(json!({ "exercise": exercise }))).into_response())
}

pub async fn list(
    State(state): State<ExercisesState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let exercises = match query.muscle_group {
        Some(group) => {
            state
                .exercise_service
                .get_exercises_by_muscle_group(&group)
                .await?
        }
        None => state.exercise_service.get_all_exercises().await?,
    };

    Ok(Json(json!({ "exercises": exercises })).into_response())
}

pub async fn show(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, INVALID_EXERCISE_ID)?;

    let exercise = state.exercise_service.get_exercise_by_id(id).await?;
    if exercise.is_absent() {
        return Err(AppError::NotFound("exercise not found".to_string()));
    }

    Ok(Json(json!({ "exercise": exercise })).into_response())
}

pub async fn update(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateExercise>, JsonRejection>,
) -> Result<Response> {
    let id = parse_id(&id, INVALID_EXERCISE_ID)?;
    let Json(form) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    state
        .exercise_service
        .update_exercise(form.into_exercise(id))
        .await?;

    Ok(Json(json!({ "message": "exercise updated" })).into_response())
}

pub async fn delete(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id, INVALID_EXERCISE_ID)?;

    state.exercise_service.delete_exercise(id).await?;

    Ok(Json(json!({ "message": "exercise deleted" })).into_response())
}
