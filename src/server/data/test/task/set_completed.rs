use super::*;

/// Tests marking an open task as completed.
///
/// Expected: Ok(Some) with is_completed true
#[tokio::test]
async fn marks_task_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, task) = factory::helpers::create_task_with_category(db).await?;
    assert!(!task.is_completed);

    let repo = TaskRepository::new(db);
    let completed = repo.set_completed(task.id).await?.unwrap();

    assert!(completed.is_completed);
    assert_eq!(completed.title, task.title);

    let stored = entity::prelude::Task::find_by_id(task.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_completed);

    Ok(())
}

/// Tests marking an already completed task again.
///
/// Expected: Ok(Some) with is_completed still true
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, task) = factory::helpers::create_task_with_category(db).await?;

    let repo = TaskRepository::new(db);
    repo.set_completed(task.id).await?;
    let again = repo.set_completed(task.id).await?.unwrap();

    assert!(again.is_completed);

    Ok(())
}

/// Tests marking an unknown task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    assert!(repo.set_completed(999).await?.is_none());

    Ok(())
}
