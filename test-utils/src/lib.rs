//! Task Manager Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the task
//! manager API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models with defaults (no database insertion)
//! - **factory**: Entity builders that insert rows with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_task_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_task_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (category, task) = factory::helpers::create_task_with_category(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
