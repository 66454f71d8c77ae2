use thiserror::Error;

/// Errors raised while building a `TestContext`.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to in-memory SQLite or creating the task tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
