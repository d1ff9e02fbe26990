//! Student CRUD handlers: create, read, list, update, delete.

use crate::error::AppError;
use crate::extractors::{DecodedBody, JsonBody};
use crate::model::{validator, StudentPayload};
use crate::response::{self, CreatedId};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|e| AppError::BadRequest(format!("invalid id {:?}: {}", id_str, e)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("creating a student");
    validator().validate(&body)?;
    let id = state.store.create_student(&body.name, &body.email, body.age).await?;
    tracing::info!(id, "student created");
    Ok(response::created(CreatedId { id }))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "getting a student");
    let id = parse_id(&id_str)?;
    let student = state.store.get_student_by_id(id).await?;
    Ok(response::ok(student))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("getting all students");
    let students = state.store.get_students_list().await?;
    Ok(response::ok(students))
}

/// Full replacement; serves both PUT and PATCH. The body is stored as decoded, absent
/// fields included, without running the validator.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    DecodedBody(body): DecodedBody<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "updating a student");
    let id = parse_id(&id_str)?;
    let student = state.store.update_student_info(id, &body.into_student(id)).await?;
    tracing::info!(id, "student updated");
    Ok(response::ok(student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete_student(id).await?;
    tracing::info!(id, "student deleted");
    Ok(response::ok(format!("student with id {} deleted successfully", id)))
}
