//! Task factory for creating test task entities.
//!
//! This module provides factory methods for creating task entities with sensible
//! defaults taken from the task fixture. The factory supports customization through
//! a builder pattern.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::task::TaskFactory;
///
/// let task = TaskFactory::new(&db, category.id)
///     .title("Finish Project")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::task::Model,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values from the task fixture.
    ///
    /// The title is made unique as `"Task {n}"`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category ID the task belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let entity = fixture::task::entity_builder()
            .title(format!("Task {}", next_id()))
            .category_id(category_id)
            .build();

        Self { db, entity }
    }

    /// Sets the task title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the task description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Sets the task deadline.
    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.entity.deadline = deadline;
        self
    }

    /// Sets the completion flag.
    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.entity.is_completed = is_completed;
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task::Model)` - Created task entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            deadline: ActiveValue::Set(self.entity.deadline),
            is_completed: ActiveValue::Set(self.entity.is_completed),
            category_id: ActiveValue::Set(self.entity.category_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values in the given category.
///
/// Shorthand for `TaskFactory::new(db, category_id).build().await`.
pub async fn create_task(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, category_id).build().await
}
