//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and hand
//! them back to the service layer, which converts them into domain models.

pub mod category;
pub mod task;

#[cfg(test)]
mod test;
