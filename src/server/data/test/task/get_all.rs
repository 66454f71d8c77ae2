use super::*;

/// Tests listing tasks on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests listing tasks across categories.
///
/// Verifies that tasks from every category are returned in ID order.
///
/// Expected: Ok with all tasks
#[tokio::test]
async fn returns_tasks_from_all_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let work = factory::create_category(db).await?;
    let personal = factory::create_category(db).await?;
    let first = factory::create_task(db, work.id).await?;
    let second = factory::create_task(db, personal.id).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_all().await?;

    assert_eq!(tasks, vec![first, second]);

    Ok(())
}
