use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::task::{CreateTaskParams, UpdateTaskParams};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task
    ///
    /// Does not check that the category exists, callers are expected to have
    /// done so.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created task
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTaskParams) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            deadline: ActiveValue::Set(params.deadline),
            is_completed: ActiveValue::Set(params.is_completed),
            category_id: ActiveValue::Set(params.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all tasks ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::task::Model>, DbErr> {
        entity::prelude::Task::find()
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a task by ID
    ///
    /// # Returns
    /// - `Ok(Some(model))`: Task found
    /// - `Ok(None)`: Task not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(id).one(self.db).await
    }

    /// Overwrites every mutable field of a task
    ///
    /// # Returns
    /// - `Ok(Some(model))`: The updated task
    /// - `Ok(None)`: Task not found, nothing was written
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        params: UpdateTaskParams,
    ) -> Result<Option<entity::task::Model>, DbErr> {
        let Some(task) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::task::ActiveModel = task.into();

        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.deadline = ActiveValue::Set(params.deadline);
        active_model.is_completed = ActiveValue::Set(params.is_completed);
        active_model.category_id = ActiveValue::Set(params.category_id);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Sets a task's completion flag to true
    ///
    /// # Returns
    /// - `Ok(Some(model))`: The completed task
    /// - `Ok(None)`: Task not found
    /// - `Err(DbErr)`: Database error
    pub async fn set_completed(&self, id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        let Some(task) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        if task.is_completed {
            return Ok(Some(task));
        }

        let mut active_model: entity::task::ActiveModel = task.into();
        active_model.is_completed = ActiveValue::Set(true);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of deleted rows, 0 if the task did not exist
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Task::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
