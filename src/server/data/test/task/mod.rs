use crate::server::{
    data::task::TaskRepository,
    model::task::{CreateTaskParams, UpdateTaskParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod set_completed;
mod update;
