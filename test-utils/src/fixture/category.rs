//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Work";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Work"`
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    name: String,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl CategoryEntityBuilder {
    /// Sets the category ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and returns the category entity model.
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            name: self.name,
        }
    }
}
