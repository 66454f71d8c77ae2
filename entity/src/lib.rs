//! SeaORM entity definitions for the task manager database.

pub mod prelude;

pub mod category;
pub mod task;
