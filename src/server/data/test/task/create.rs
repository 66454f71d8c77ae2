use super::*;

/// Tests creating a new task.
///
/// Verifies that the repository stores every provided field and assigns an ID.
///
/// Expected: Ok with task created
#[tokio::test]
async fn creates_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let deadline = fixture::task::default_deadline();

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            title: "Test Task".to_string(),
            description: Some("Test Description".to_string()),
            deadline,
            is_completed: false,
            category_id: category.id,
        })
        .await?;

    assert!(task.id > 0);
    assert_eq!(task.title, "Test Task");
    assert_eq!(task.description.as_deref(), Some("Test Description"));
    assert_eq!(task.deadline, deadline);
    assert!(!task.is_completed);
    assert_eq!(task.category_id, category.id);

    let stored = entity::prelude::Task::find_by_id(task.id).one(db).await?;
    assert_eq!(stored, Some(task));

    Ok(())
}

/// Tests creating a task without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_task_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            title: "Buy Groceries".to_string(),
            description: None,
            deadline: Utc::now() + Duration::days(1),
            is_completed: false,
            category_id: category.id,
        })
        .await?;

    assert!(task.description.is_none());

    Ok(())
}
