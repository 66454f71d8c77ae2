//! Business logic layer sitting between controllers and repositories.

pub mod category;
pub mod task;

#[cfg(test)]
mod test;
