use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::parse_id;
use crate::error::{AppError, Result};
use crate::models::CreateUser;
use crate::services::UserService;

#[derive(Clone)]
pub struct UsersState {
    pub user_service: UserService,
}

const INVALID_USER_ID: &str = "invalid user ID";

pub async fn create(
    State(state): State<UsersState>,
    payload: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<Response> {
    let Json(form) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = state.user_service.create_user(form.into()).await?;

    Ok((StatusCode::CREATED, Json(json!({ "user": user }))).into_response())
}

pub async fn list(State(state): State<UsersState>) -> Result<Response> {
    let users = state.user_service.get_all_users().await?;

    Ok(Json(json!({ "users": users })).into_response())
}

pub async fn show(State(state): State<UsersState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, INVALID_USER_ID)?;

    let user = state.user_service.get_user_by_id(id).await?;
    if user.is_absent() {
        return Err(AppError::NotFound("user not found".to_string()));
    }

    Ok(Json(json!({ "user": user })).into_response())
}

pub async fn delete(State(state): State<UsersState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, INVALID_USER_ID)?;

    state.user_service.delete_user(id).await?;

    Ok(Json(json!({ "message": "user deleted" })).into_response())
}
