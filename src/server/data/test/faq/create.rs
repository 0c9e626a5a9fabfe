use super::*;

/// Tests creating an FAQ with defaults and then updating part of it.
///
/// Expected: Ok with category "General", published, and only the updated
/// field changed
#[tokio::test]
async fn creates_with_defaults_and_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FaqRepository::new(db);
    let faq = repo
        .create(CreateFaqParam {
            question_ko: "질문".to_string(),
            question_en: "Question".to_string(),
            answer_ko: "답변".to_string(),
            answer_en: "Answer".to_string(),
            category: None,
            order_index: None,
            is_published: None,
            is_pinned: None,
        })
        .await?;

    assert_eq!(faq.category, "General");
    assert!(faq.is_published);
    assert!(!faq.is_pinned);
    assert_eq!(faq.order_index, 0);

    let updated = repo
        .update(
            faq.id,
            UpdateFaqParam {
                is_pinned: Some(true),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.is_pinned);
    assert_eq!(updated.question_en, "Question");

    assert!(repo.delete(faq.id).await?);
    assert!(!repo.delete(faq.id).await?);

    Ok(())
}
