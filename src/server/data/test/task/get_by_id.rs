use super::*;

/// Tests fetching a stored task.
///
/// Expected: Ok(Some) with the task
#[tokio::test]
async fn returns_existing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, task) = factory::helpers::create_task_with_category(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.get_by_id(task.id).await?;

    assert_eq!(result, Some(task));

    Ok(())
}

/// Tests fetching an unknown task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
