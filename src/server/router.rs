use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto},
        task::{TaskDto, TaskInputDto},
    },
    server::{
        controller::{
            category::{self, create_category, get_categories, CATEGORY_TAG},
            task::{
                self, complete_task, create_task, delete_task, get_task_by_id, get_tasks,
                update_task, TASK_TAG,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Task Manager API", description = "Tasks grouped by category"),
    paths(
        task::get_tasks,
        task::get_task_by_id,
        task::create_task,
        task::update_task,
        task::complete_task,
        task::delete_task,
        category::get_categories,
        category::create_category,
    ),
    components(schemas(TaskDto, TaskInputDto, CategoryDto, CreateCategoryDto, ErrorDto)),
    tags(
        (name = TASK_TAG, description = "Task management"),
        (name = CATEGORY_TAG, description = "Task categories"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(get_tasks).post(create_task))
        .route(
            "/api/tasks/categories",
            get(get_categories).post(create_category),
        )
        .route(
            "/api/tasks/{id}",
            get(get_task_by_id).put(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/complete", patch(complete_task))
}

/// Builds the full application: API routes, Swagger UI, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(router().with_state(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
