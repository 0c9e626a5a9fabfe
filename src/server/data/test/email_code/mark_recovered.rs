use super::*;

/// Tests that a used code can be spent on a recovery exactly once.
///
/// Expected: true on the first call, false on the second
#[tokio::test]
async fn consumes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailVerificationCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let code = factory::email_verification_code::EmailCodeFactory::new(db, "witch@xylo.world")
        .used(true)
        .build()
        .await?;
    let repo = EmailCodeRepository::new(db);

    assert!(repo.mark_recovered(code.id, Utc::now()).await?);
    assert!(!repo.mark_recovered(code.id, Utc::now()).await?);

    let stored = repo.find_by_id(code.id).await?.unwrap();
    assert!(stored.recovered_at.is_some());

    Ok(())
}

/// Tests that an unused code cannot be spent on a recovery.
///
/// Expected: false, recovered_at stays empty
#[tokio::test]
async fn ignores_unused_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailVerificationCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let code = factory::create_email_code(db, "witch@xylo.world").await?;
    let repo = EmailCodeRepository::new(db);

    assert!(!repo.mark_recovered(code.id, Utc::now()).await?);
    assert!(repo.find_by_id(code.id).await?.unwrap().recovered_at.is_none());

    Ok(())
}
