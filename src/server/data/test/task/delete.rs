use super::*;

/// Tests deleting a task.
///
/// Expected: Ok(1) with task removed
#[tokio::test]
async fn deletes_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, task) = factory::helpers::create_task_with_category(db).await?;

    let repo = TaskRepository::new(db);
    let rows = repo.delete(task.id).await?;

    assert_eq!(rows, 1);
    let check = entity::prelude::Task::find_by_id(task.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests that deleting a task leaves its category in place.
///
/// Expected: Ok with category still stored
#[tokio::test]
async fn does_not_touch_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, task) = factory::helpers::create_task_with_category(db).await?;

    let repo = TaskRepository::new(db);
    repo.delete(task.id).await?;

    let check = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(check.is_some());

    Ok(())
}

/// Tests deleting non-existent task succeeds.
///
/// Verifies that attempting to delete a task that doesn't exist
/// completes successfully without error.
///
/// Expected: Ok(0)
#[tokio::test]
async fn succeeds_for_nonexistent_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let rows = repo.delete(999999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
