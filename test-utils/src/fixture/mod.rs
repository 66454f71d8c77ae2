//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let task = fixture::task::entity();
//!
//! // Create with custom fields
//! let done = fixture::task::entity_builder()
//!     .is_completed(true)
//!     .build();
//! ```

pub mod category;
pub mod task;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use task::{entity as task_entity, entity_builder as task_entity_builder};
