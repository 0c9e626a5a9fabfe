use super::*;
use crate::server::data::faq::FaqRepository;

/// Tests reading a published FAQ twice.
///
/// Expected: Each read increments the stored view count
#[tokio::test]
async fn counts_views() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let faq = factory::create_faq(db).await?;
    let service = FaqService::new(db);

    let first = service.get(faq.id, Some("en")).await?;
    assert_eq!(first.question, faq.question_en);
    assert_eq!(first.view_count, 0);
    service.get(faq.id, None).await?;

    let stored = FaqRepository::new(db).find_by_id(faq.id).await?.unwrap();
    assert_eq!(stored.view_count, 2);

    Ok(())
}

/// Tests reading an unpublished FAQ.
///
/// Expected: 404
#[tokio::test]
async fn hides_unpublished() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let draft = factory::faq::FaqFactory::new(db).published(false).build().await?;

    let result = FaqService::new(db).get(draft.id, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
