//! Wire-level request and response types shared by every API endpoint.

pub mod api;
pub mod category;
pub mod task;
