use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
use uuid::Uuid;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/create",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created successfully", body = StudentResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "Email already registered")
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let student = services::create_student(state.db.pool(), req).await?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/all-users",
    responses(
        (status = 200, description = "List all students successfully", body = Vec<StudentResponse>)
    ),
    tag = "students"
)]
pub async fn list_students(State(state): State<AppState>) -> Result<Response, WebError> {
    let students = services::list_students(state.db.pool()).await?;

    let response: Vec<StudentResponse> = students.into_iter().map(StudentResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let student = services::get_student(state.db.pool(), id).await?;

    Ok(Json(StudentResponse::from(student)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/v1/edit/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated successfully", body = StudentResponse),
        (status = 400, description = "Invalid field"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Email already registered")
    ),
    tag = "students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_student(state.db.pool(), id, &req).await?;

    Ok(Json(StudentResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v1/delete/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student deleted successfully"),
        (status = 404, description = "Student not found")
    ),
    tag = "students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_student(state.db.pool(), id).await?;

    Ok(Json(json!({ "message": "Student deleted successfully" })).into_response())
}
