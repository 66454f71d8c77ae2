//! Domain models for task data operations.
//!
//! Defines the task domain model along with the parameter types consumed by the
//! task repository and service.

use chrono::{DateTime, Utc};

use crate::model::task::{TaskDto, TaskInputDto};

/// A to-do item with a deadline and completion state.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: i32,
    /// Short title, 3 to 30 characters when created through the API.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// When the task is due.
    pub deadline: DateTime<Utc>,
    /// Whether the task has been marked as done.
    pub is_completed: bool,
    /// ID of the category this task belongs to.
    pub category_id: i32,
}

impl Task {
    /// Converts an entity model to a task domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Task` - The converted task domain model
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            deadline: entity.deadline,
            is_completed: entity.is_completed,
            category_id: entity.category_id,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            is_completed: self.is_completed,
            category_id: self.category_id,
        }
    }
}

/// Parameters for creating a new task.
///
/// Validated by `service::task::validation::check_inputs` before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskParams {
    /// Title of the task.
    pub title: String,
    /// Optional description, an empty string is treated like a missing one.
    pub description: Option<String>,
    /// Deadline, the Unix epoch means the caller did not provide one.
    pub deadline: DateTime<Utc>,
    /// Initial completion state.
    pub is_completed: bool,
    /// ID of the category the task should belong to.
    pub category_id: i32,
}

impl CreateTaskParams {
    pub fn from_dto(dto: TaskInputDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            deadline: dto.deadline,
            is_completed: dto.is_completed,
            category_id: dto.category_id,
        }
    }
}

/// Parameters for replacing every mutable field of an existing task.
///
/// There is no partial update: each field here overwrites the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTaskParams {
    /// ID of the task to update.
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub deadline: DateTime<Utc>,
    pub is_completed: bool,
    pub category_id: i32,
}

impl UpdateTaskParams {
    pub fn from_dto(id: i32, dto: TaskInputDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            deadline: dto.deadline,
            is_completed: dto.is_completed,
            category_id: dto.category_id,
        }
    }
}
