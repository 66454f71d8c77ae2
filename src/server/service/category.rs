use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let categories = repo.get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Creates a new category
    ///
    /// # Returns
    /// - `Ok(Category)`: The created category
    /// - `Err(AppError::BadRequest)`: Name is empty or whitespace
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Category name is required.".to_string()));
        }

        let repo = CategoryRepository::new(self.db);

        let category = repo.create(params).await?;

        tracing::info!("Created category {} '{}'", category.id, category.name);

        Ok(Category::from_entity(category))
    }
}
