use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{TaskDto, TaskInputDto},
    },
    server::{
        error::AppError,
        model::task::{CreateTaskParams, UpdateTaskParams},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Get all tasks.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Every stored task
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db).get_all().await?;

    let dto: Vec<TaskDto> = tasks.into_iter().map(|task| task.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a single task by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Task ID
///
/// # Returns
/// - `200 OK` - The task
/// - `404 Not Found` - No task with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved task", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Create a new task.
///
/// The category is checked first: a task pointing at an unknown category is
/// rejected whatever its other fields contain. The remaining fields are then
/// validated together and every failure is reported in one message. A missing
/// description is reported but doesn't reject the task.
///
/// A literal `null` body is rejected with `"Task cannot be null."`. Fields omitted
/// from the body take their defaults, so an omitted deadline fails as required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Task data, `None` when the body is `null`
///
/// # Returns
/// - `201 Created` - The created task, with its URL in the `Location` header
/// - `400 Bad Request` - Null body, unknown category or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = TaskInputDto,
    responses(
        (status = 201, description = "Successfully created task", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<Option<TaskInputDto>>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload.map(CreateTaskParams::from_dto);

    let task = TaskService::new(&state.db).create(params).await?;

    let location = format!("/api/tasks/{}", task.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(task.into_dto()),
    ))
}

/// Replace every field of a task.
///
/// No validation runs on updates. Updating a task that doesn't exist is a no-op
/// and responds with a `null` body.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Task ID
/// - `payload` - New field values, omitted fields take their defaults
///
/// # Returns
/// - `200 OK` - The updated task, or `null` when no task has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = TaskInputDto,
    responses(
        (status = 200, description = "Task updated, null when not found", body = Option<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TaskInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db)
        .update(UpdateTaskParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(task.map(|task| task.into_dto()))))
}

/// Mark a task as completed.
///
/// # Returns
/// - `200 OK` - The completed task
/// - `404 Not Found` - No task with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}/complete",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task marked as completed", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db)
        .mark_completed(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete a task.
///
/// Deleting a task that doesn't exist still succeeds.
///
/// # Returns
/// - `204 No Content` - Task deleted or never existed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TaskService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
