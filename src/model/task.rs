use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TaskDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub deadline: DateTime<Utc>,
    pub is_completed: bool,
    pub category_id: i32,
}

/// Request body for creating or replacing a task.
///
/// Every field falls back to its default when omitted, so a replace overwrites
/// missing fields rather than keeping the stored values. An omitted deadline
/// becomes the Unix epoch, which validation treats as unset.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct TaskInputDto {
    pub title: String,
    pub description: Option<String>,
    pub deadline: DateTime<Utc>,
    pub is_completed: bool,
    pub category_id: i32,
}
