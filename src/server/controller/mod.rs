pub mod category;
pub mod task;

#[cfg(test)]
mod test;
