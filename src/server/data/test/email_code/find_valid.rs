use super::*;

/// Tests that only unused, unexpired matching codes are found.
///
/// Expected: Ok(Some) for the live code, Ok(None) for the expired, used and
/// wrong codes
#[tokio::test]
async fn finds_live_matching_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailVerificationCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let email = "witch@xylo.world";
    let now = Utc::now();

    let repo = EmailCodeRepository::new(db);
    let live = repo
        .create(email, "111111", now + Duration::minutes(15), RequestMeta::default())
        .await?;
    repo.create(email, "222222", now - Duration::minutes(1), RequestMeta::default())
        .await?;
    factory::email_verification_code::EmailCodeFactory::new(db, email)
        .code("333333")
        .used(true)
        .build()
        .await?;

    assert_eq!(
        repo.find_valid(email, "111111", now).await?.map(|c| c.id),
        Some(live.id)
    );
    assert!(repo.find_valid(email, "222222", now).await?.is_none());
    assert!(repo.find_valid(email, "333333", now).await?.is_none());
    assert!(repo.find_valid(email, "999999", now).await?.is_none());

    Ok(())
}

/// Tests that marking a code used hides it from later lookups.
///
/// Expected: Ok(None) after mark_used
#[tokio::test]
async fn used_code_is_not_valid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailVerificationCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let code = factory::create_email_code(db, "witch@xylo.world").await?;

    let repo = EmailCodeRepository::new(db);
    let used = repo.mark_used(code.clone(), Utc::now()).await?;

    assert!(used.is_used);
    assert!(used.used_at.is_some());
    assert!(repo
        .find_valid(&code.email, &code.code, Utc::now())
        .await?
        .is_none());

    Ok(())
}
