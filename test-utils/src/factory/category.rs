//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db).name("Personal").build().await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with a unique default name `"Category {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Category {}", next_id()),
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
