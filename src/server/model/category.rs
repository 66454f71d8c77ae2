//! Category domain model and parameters.

use crate::model::category::{CategoryDto, CreateCategoryDto};

/// Named grouping that every task belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self { name: dto.name }
    }
}
