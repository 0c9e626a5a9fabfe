use super::*;

fn create_dto() -> CreateFaqDto {
    CreateFaqDto {
        question_ko: "포인트는 어떻게 받나요?".to_string(),
        question_en: "How do I earn points?".to_string(),
        answer_ko: "영상을 올리세요.".to_string(),
        answer_en: "Upload videos.".to_string(),
        category: None,
        order_index: None,
        is_published: None,
        is_pinned: None,
    }
}

/// Tests creating an FAQ with only the required fields.
///
/// Expected: Published, unpinned, order 0 in the General category
#[tokio::test]
async fn create_applies_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FaqService::new(db).create(create_dto()).await?;

    assert_eq!(result.message, "FAQ created successfully");
    assert!(result.faq.is_published);
    assert!(!result.faq.is_pinned);
    assert_eq!(result.faq.order_index, 0);
    assert_eq!(result.faq.category, "General");

    Ok(())
}

/// Tests a partial update.
///
/// Expected: Only the provided fields change
#[tokio::test]
async fn update_is_partial() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let faq = factory::create_faq(db).await?;

    let result = FaqService::new(db)
        .update(
            faq.id,
            UpdateFaqDto {
                is_pinned: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.faq.is_pinned);
    assert_eq!(result.faq.question_en, faq.question_en);

    Ok(())
}

/// Tests updating and deleting a missing FAQ.
///
/// Expected: 404 for both, and a successful delete of an existing one
#[tokio::test]
async fn missing_faq() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let faq = factory::create_faq(db).await?;
    let service = FaqService::new(db);

    let update = service.update(999, UpdateFaqDto::default()).await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let deleted = service.delete(faq.id).await?;
    assert_eq!(deleted.message, "FAQ deleted successfully");

    let again = service.delete(faq.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
