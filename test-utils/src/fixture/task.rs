//! Task fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating task entity models without database insertion.
//! These are useful for unit testing validation and DTO conversion, and provide the
//! default values used by the task factory.

use chrono::{DateTime, TimeZone, Utc};
use entity::task;

/// Default test task title.
pub const DEFAULT_TITLE: &str = "Test Task";

/// Default test task description.
pub const DEFAULT_DESCRIPTION: &str = "Test Description";

/// Default category ID for tasks.
pub const DEFAULT_CATEGORY_ID: i32 = 1;

/// Default deadline for test tasks, 2030-01-15 09:00:00 UTC.
pub fn default_deadline() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 15, 9, 0, 0).unwrap()
}

/// Creates a task entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Task"`
/// - description: `Some("Test Description")`
/// - deadline: `default_deadline()`
/// - is_completed: `false`
/// - category_id: `1`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let task = fixture::task::entity();
/// assert_eq!(task.title, "Test Task");
/// assert!(!task.is_completed);
/// ```
pub fn entity() -> task::Model {
    entity_builder().build()
}

/// Creates a task entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let task = fixture::task::entity_builder()
///     .title("Buy Groceries")
///     .description(None)
///     .build();
/// ```
pub fn entity_builder() -> TaskEntityBuilder {
    TaskEntityBuilder::default()
}

/// Builder for creating customized task entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct TaskEntityBuilder {
    id: i32,
    title: String,
    description: Option<String>,
    deadline: DateTime<Utc>,
    is_completed: bool,
    category_id: i32,
}

impl Default for TaskEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            deadline: default_deadline(),
            is_completed: false,
            category_id: DEFAULT_CATEGORY_ID,
        }
    }
}

impl TaskEntityBuilder {
    /// Sets the task ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the task title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the task description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the task deadline.
    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the completion flag.
    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Sets the category ID.
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = category_id;
        self
    }

    /// Builds and returns the task entity model.
    pub fn build(self) -> task::Model {
        task::Model {
            id: self.id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            is_completed: self.is_completed,
            category_id: self.category_id,
        }
    }
}
