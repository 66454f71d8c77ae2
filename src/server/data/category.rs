use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::category::CreateCategoryParams;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category
    ///
    /// # Arguments
    /// - `params`: Category name
    ///
    /// # Returns
    /// - `Ok(Model)`: The created category
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all categories ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether a category with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
