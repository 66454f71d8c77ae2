use super::*;

/// Tests creating a new category.
///
/// Verifies that the repository inserts the category and assigns it an ID.
///
/// Expected: Ok with category created
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Work".to_string(),
        })
        .await?;

    assert!(category.id > 0);
    assert_eq!(category.name, "Work");

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(category));

    Ok(())
}

/// Tests creating several categories.
///
/// Verifies that each category receives its own ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let work = repo
        .create(CreateCategoryParams {
            name: "Work".to_string(),
        })
        .await?;
    let personal = repo
        .create(CreateCategoryParams {
            name: "Personal".to_string(),
        })
        .await?;

    assert_ne!(work.id, personal.id);

    Ok(())
}
