use super::*;

/// Tests overwriting every field of a task.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, task) = factory::helpers::create_task_with_category(db).await?;
    let other = factory::create_category(db).await?;
    let new_deadline = fixture::task::default_deadline() + Duration::days(5);

    let repo = TaskRepository::new(db);
    let updated = repo
        .update(UpdateTaskParams {
            id: task.id,
            title: "New Title".to_string(),
            description: Some("New Description".to_string()),
            deadline: new_deadline,
            is_completed: true,
            category_id: other.id,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, task.id);
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.description.as_deref(), Some("New Description"));
    assert_eq!(updated.deadline, new_deadline);
    assert!(updated.is_completed);
    assert_eq!(updated.category_id, other.id);

    Ok(())
}

/// Tests that a missing description in the update clears the stored one.
///
/// Expected: Ok(Some) with description set to None
#[tokio::test]
async fn clears_description_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, task) = factory::helpers::create_task_with_category(db).await?;
    assert!(task.description.is_some());

    let repo = TaskRepository::new(db);
    let updated = repo
        .update(UpdateTaskParams {
            id: task.id,
            title: task.title.clone(),
            description: None,
            deadline: task.deadline,
            is_completed: false,
            category_id: category.id,
        })
        .await?
        .unwrap();

    assert!(updated.description.is_none());

    Ok(())
}

/// Tests updating an unknown task.
///
/// Verifies that nothing is written and no error is raised.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let result = repo
        .update(UpdateTaskParams {
            id: 999,
            title: "Ghost".to_string(),
            description: None,
            deadline: Utc::now(),
            is_completed: false,
            category_id: 1,
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Task::find().count(db).await?, 0);

    Ok(())
}
