//! Input validation for new tasks.
//!
//! Four independent checks run in a fixed order: title length, deadline,
//! category id and description. Every check that fires contributes a message to
//! the report. The description check only warns: it adds its message but never
//! fails the report.

use chrono::{DateTime, Utc};

use crate::server::{error::validation::ValidationError, model::task::CreateTaskParams};

pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 30;

pub const TITLE_TOO_SHORT: &str = "Title is too short. It must be at least 3 characters.";
pub const TITLE_TOO_LONG: &str =
    "Title is too long. It must be less than or equal to 30 characters.";
pub const TITLE_VALID: &str = "Title is valid.";
pub const DEADLINE_REQUIRED: &str = "Deadline is required.";
pub const INVALID_CATEGORY_ID: &str = "Invalid CategoryId.";
pub const DESCRIPTION_MISSING: &str = "Description is either null or empty.";

/// Outcome of a single field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub message: &'static str,
}

/// Combined outcome of all task input checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// False if any hard check failed. Warnings do not affect this.
    pub is_valid: bool,
    /// Messages of every check that fired, in evaluation order.
    pub messages: Vec<&'static str>,
}

impl ValidationReport {
    /// All messages joined by a single space.
    pub fn message(&self) -> String {
        self.messages.join(" ")
    }
}

/// Checks that a title is between 3 and 30 characters, inclusive.
///
/// Length is counted in characters, not bytes.
pub fn title_length(title: &str) -> FieldCheck {
    let length = title.chars().count();

    if length < MIN_TITLE_LENGTH {
        return FieldCheck {
            is_valid: false,
            message: TITLE_TOO_SHORT,
        };
    }
    if length > MAX_TITLE_LENGTH {
        return FieldCheck {
            is_valid: false,
            message: TITLE_TOO_LONG,
        };
    }

    FieldCheck {
        is_valid: true,
        message: TITLE_VALID,
    }
}

/// Runs every input check against a task about to be created.
///
/// # Arguments
/// - `task` - The task to check, `None` when the request carried no task at all
///
/// # Returns
/// - `Ok(ValidationReport)` - Pass/fail flag plus the messages of every check that fired
/// - `Err(ValidationError::MissingTask)` - No task was supplied
pub fn check_inputs(task: Option<&CreateTaskParams>) -> Result<ValidationReport, ValidationError> {
    let task = task.ok_or(ValidationError::MissingTask)?;

    let mut report = ValidationReport {
        is_valid: true,
        messages: Vec::new(),
    };

    let title = title_length(&task.title);
    if !title.is_valid {
        tracing::debug!("{}", title.message);
        report.messages.push(title.message);
        report.is_valid = false;
    }

    if is_unset(&task.deadline) {
        tracing::debug!("{}", DEADLINE_REQUIRED);
        report.messages.push(DEADLINE_REQUIRED);
        report.is_valid = false;
    }

    if task.category_id <= 0 {
        tracing::debug!("{}", INVALID_CATEGORY_ID);
        report.messages.push(INVALID_CATEGORY_ID);
        report.is_valid = false;
    }

    // Warning only.
    if task.description.as_deref().is_none_or(str::is_empty) {
        tracing::debug!("{}", DESCRIPTION_MISSING);
        report.messages.push(DESCRIPTION_MISSING);
    }

    Ok(report)
}

/// The Unix epoch stands in for "no deadline given".
fn is_unset(deadline: &DateTime<Utc>) -> bool {
    *deadline == DateTime::<Utc>::default()
}
