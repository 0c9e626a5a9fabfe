use super::*;

/// Tests listing distinct categories of published FAQs.
///
/// Expected: Ok with sorted, de-duplicated categories excluding unpublished ones
#[tokio::test]
async fn lists_distinct_published_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for category in ["Points", "General", "Points"] {
        factory::faq::FaqFactory::new(db)
            .category(category)
            .build()
            .await?;
    }
    factory::faq::FaqFactory::new(db)
        .category("Hidden")
        .published(false)
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let categories = repo.get_categories().await?;

    assert_eq!(categories, vec!["General".to_string(), "Points".to_string()]);

    Ok(())
}
