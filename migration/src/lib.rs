pub use sea_orm_migration::prelude::*;

mod m20241104_000001_create_category_table;
mod m20241104_000002_create_task_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241104_000001_create_category_table::Migration),
            Box::new(m20241104_000002_create_task_table::Migration),
        ]
    }
}
