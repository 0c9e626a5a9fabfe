use super::*;

/// Tests counting a failed attempt against live codes only.
///
/// Expected: Ok(1) with the pending code's attempts raised and the used code untouched
#[tokio::test]
async fn increments_pending_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailVerificationCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let email = "witch@xylo.world";
    let pending = factory::email_verification_code::EmailCodeFactory::new(db, email)
        .code("111111")
        .attempts(1)
        .build()
        .await?;
    factory::email_verification_code::EmailCodeFactory::new(db, email)
        .code("222222")
        .used(true)
        .build()
        .await?;

    let repo = EmailCodeRepository::new(db);
    let affected = repo.increment_attempts(email, Utc::now()).await?;

    assert_eq!(affected, 1);
    let stored = repo
        .find_valid(email, "111111", Utc::now())
        .await?
        .unwrap();
    assert_eq!(stored.id, pending.id);
    assert_eq!(stored.attempts, 2);

    Ok(())
}
