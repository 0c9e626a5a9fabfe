use super::*;

/// Tests ordering of published FAQs.
///
/// Pinned entries come first, then order_index ascending. Unpublished entries
/// are hidden.
///
/// Expected: Ok with [pinned, order 1, order 2] and total 3
#[tokio::test]
async fn orders_pinned_then_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::faq::FaqFactory::new(db).order_index(2).build().await?;
    let first = factory::faq::FaqFactory::new(db).order_index(1).build().await?;
    let pinned = factory::faq::FaqFactory::new(db)
        .order_index(9)
        .pinned(true)
        .build()
        .await?;
    factory::faq::FaqFactory::new(db)
        .order_index(0)
        .published(false)
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let (faqs, total) = repo.get_published(&query(Lang::En, None)).await?;

    assert_eq!(total, 3);
    assert_eq!(
        faqs.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![pinned.id, first.id, second.id]
    );

    Ok(())
}

/// Tests that every search term must match the chosen language.
///
/// Expected: Ok with only the FAQ whose English text contains both terms
#[tokio::test]
async fn matches_all_terms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let both = factory::faq::FaqFactory::new(db)
        .question_en("How do I claim XLT?")
        .answer_en("Reach the minimum points first.")
        .build()
        .await?;
    factory::faq::FaqFactory::new(db)
        .question_en("What is XLT?")
        .answer_en("The platform token.")
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let (faqs, total) = repo
        .get_published(&query(Lang::En, Some("XLT minimum")))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(faqs[0].id, both.id);

    let (korean, _) = repo
        .get_published(&query(Lang::Ko, Some("minimum")))
        .await?;
    assert!(korean.is_empty());

    Ok(())
}
