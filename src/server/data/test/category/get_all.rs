use super::*;

/// Tests listing categories on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}

/// Tests listing categories.
///
/// Verifies that every category is returned in ID order.
///
/// Expected: Ok with all categories
#[tokio::test]
async fn returns_all_categories_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_category(db).await?;
    let second = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories, vec![first, second]);

    Ok(())
}
