use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto},
    },
    server::{
        error::AppError, model::category::CreateCategoryParams,
        service::category::CategoryService, state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories.
///
/// # Returns
/// - `200 OK` - Every category, ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tasks/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dto: Vec<CategoryDto> = categories
        .into_iter()
        .map(|category| category.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a new category.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Category name
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - Name is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tasks/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}
