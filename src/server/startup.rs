use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations. In-memory databases are limited to a
/// single pooled connection so every request sees the same data.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    if config.database_url.contains(":memory:") {
        // The shared in-memory database is dropped once its last connection closes.
        opt.min_connections(1)
            .max_connections(1)
            .max_lifetime(None::<std::time::Duration>)
            .idle_timeout(None::<std::time::Duration>);
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts demo categories and tasks into an empty database.
///
/// Does nothing when at least one category already exists.
///
/// # Returns
/// - `Ok(true)` - Demo data was inserted
/// - `Ok(false)` - Database already had categories
/// - `Err(AppError::DbErr)` - Insert failed
pub async fn seed_database(db: &DatabaseConnection) -> Result<bool, AppError> {
    if entity::prelude::Category::find().count(db).await? > 0 {
        return Ok(false);
    }

    let work = insert_category(db, "Work").await?;
    let personal = insert_category(db, "Personal").await?;

    let now = Utc::now();
    let tasks = [
        (
            "Finish Project",
            "Complete the to-do list project",
            now + Duration::days(2),
            work.id,
        ),
        (
            "Buy Groceries",
            "Buy fruits, vegetables, and milk",
            now + Duration::days(1),
            personal.id,
        ),
        (
            "Send Emails",
            "Send the project update emails to the team",
            now + Duration::days(1),
            work.id,
        ),
    ];

    for (title, description, deadline, category_id) in tasks {
        entity::task::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(Some(description.to_string())),
            deadline: ActiveValue::Set(deadline),
            is_completed: ActiveValue::Set(false),
            category_id: ActiveValue::Set(category_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::info!("Seeded database with demo categories and tasks");

    Ok(true)
}

async fn insert_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::category::Model, AppError> {
    let category = entity::category::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(category)
}
