pub use super::category::Entity as Category;
pub use super::task::Entity as Task;
