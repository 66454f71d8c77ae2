mod category;
mod task;
