use crate::server::{
    error::{validation::ValidationError, AppError},
    model::{
        category::CreateCategoryParams,
        task::{CreateTaskParams, UpdateTaskParams},
    },
    service::{category::CategoryService, task::TaskService},
};
use chrono::{DateTime, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};


/// Valid creation params pointing at the given category.
fn create_params(category_id: i32) -> CreateTaskParams {
    CreateTaskParams {
        title: "Test Task".to_string(),
        description: Some("Test Description".to_string()),
        deadline: fixture::task::default_deadline(),
        is_completed: false,
        category_id,
    }
}
