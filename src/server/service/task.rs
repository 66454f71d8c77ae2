pub mod validation;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, task::TaskRepository},
    error::{validation::ValidationError, AppError},
    model::task::{CreateTaskParams, Task, UpdateTaskParams},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every task
    pub async fn get_all(&self) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        let tasks = repo.get_all().await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Gets a task by ID, None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        let task = repo.get_by_id(id).await?;

        Ok(task.map(Task::from_entity))
    }

    /// Creates a new task after checking its category and validating its fields
    ///
    /// The category lookup happens first, so an unknown category is reported on its
    /// own even when other fields are invalid too.
    ///
    /// # Arguments
    /// - `params`: The task to create, `None` for a null request body
    ///
    /// # Returns
    /// - `Ok(Task)`: The created task
    /// - `Err(AppError::ValidationErr)`: No task supplied
    /// - `Err(AppError::BadRequest)`: Category not found, or the aggregated validation message
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, params: Option<CreateTaskParams>) -> Result<Task, AppError> {
        let params = params.ok_or(ValidationError::MissingTask)?;

        if !CategoryRepository::new(self.db)
            .exists(params.category_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "Invalid CategoryId. Category not found.".to_string(),
            ));
        }

        let report = validation::check_inputs(Some(&params))?;
        if !report.is_valid {
            return Err(AppError::BadRequest(report.message()));
        }

        let task = TaskRepository::new(self.db).create(params).await?;

        tracing::info!("Created task {} in category {}", task.id, task.category_id);

        Ok(Task::from_entity(task))
    }

    /// Replaces every mutable field of a task
    ///
    /// Fields are not validated. Updating a task that doesn't exist is a silent no-op.
    ///
    /// # Returns
    /// - `Ok(Some(Task))`: The updated task
    /// - `Ok(None)`: Task not found, nothing changed
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn update(&self, params: UpdateTaskParams) -> Result<Option<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        let id = params.id;
        let task = repo.update(params).await?;

        if task.is_none() {
            tracing::debug!("Update skipped, task {} not found", id);
        }

        Ok(task.map(Task::from_entity))
    }

    /// Marks a task as completed, repeated calls leave it completed
    ///
    /// # Returns
    /// - `Ok(Some(Task))`: The completed task
    /// - `Ok(None)`: Task not found
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn mark_completed(&self, id: i32) -> Result<Option<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        let task = repo.set_completed(id).await?;

        Ok(task.map(Task::from_entity))
    }

    /// Deletes a task, deleting a task that doesn't exist is a silent no-op
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TaskRepository::new(self.db);

        let rows = repo.delete(id).await?;

        if rows == 0 {
            tracing::debug!("Delete skipped, task {} not found", id);
        }

        Ok(())
    }
}
