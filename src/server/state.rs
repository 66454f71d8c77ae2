//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Cloned for each request via Axum's state extraction. `DatabaseConnection` is a
/// connection pool, so clones share the same database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing task storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
