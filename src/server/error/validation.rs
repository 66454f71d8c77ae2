use thiserror::Error;

/// Precondition failures raised before any field of a task is inspected.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// No task was supplied at all (a JSON `null` request body).
    ///
    /// Results in a 400 Bad Request response.
    #[error("Task cannot be null.")]
    MissingTask,
}
