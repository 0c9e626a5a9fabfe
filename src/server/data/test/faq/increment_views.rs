use super::*;

/// Tests that viewing an FAQ bumps its counter.
///
/// Expected: Ok with view_count 2 after two views
#[tokio::test]
async fn increments_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faq = factory::create_faq(db).await?;

    let repo = FaqRepository::new(db);
    repo.increment_views(faq.id).await?;
    repo.increment_views(faq.id).await?;

    let stored = repo.find_by_id(faq.id).await?.unwrap();
    assert_eq!(stored.view_count, 2);

    Ok(())
}
