//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a task belonging to it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, task))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::task::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let task = crate::factory::task::create_task(db, category.id).await?;

    Ok((category, task))
}
