use super::*;

/// Tests existence check for a stored category.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.exists(category.id).await?);

    Ok(())
}

/// Tests existence check for an unknown category.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    assert!(!repo.exists(999).await?);
    assert!(!repo.exists(0).await?);

    Ok(())
}
