use crate::server::{data::category::CategoryRepository, model::category::CreateCategoryParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod get_all;
