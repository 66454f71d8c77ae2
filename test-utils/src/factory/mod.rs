//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database, unlike the
//! fixtures they take their defaults from.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let category = factory::category::create_category(&db).await?;
//!     let task = factory::task::create_task(&db, category.id).await?;
//!
//!     // Create with all dependencies
//!     let (category, task) = factory::helpers::create_task_with_category(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let task = factory::task::TaskFactory::new(&db, category.id)
//!     .title("Buy Groceries")
//!     .is_completed(true)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod task;

pub use category::create_category;
pub use task::create_task;
