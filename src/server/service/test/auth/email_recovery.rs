use super::*;

const EMAIL: &str = "witch@xylo.world";

/// Tests requesting a code for a registered email.
///
/// Expected: Code stored with the configured lifetime in seconds
#[tokio::test]
async fn sends_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    factory::user::UserFactory::new(db).email(EMAIL).build().await?;

    let result = AuthService::new(db, &config)
        .send_code(EMAIL, RequestMeta::default(), &LogCodeSender)
        .await?;

    assert!(result.success);
    assert_eq!(result.expires_in, config.verification_code_expires_minutes * 60);

    Ok(())
}

/// Tests requesting a code for an unknown email.
///
/// Expected: 404
#[tokio::test]
async fn unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();

    let result = AuthService::new(db, &config)
        .send_code(EMAIL, RequestMeta::default(), &LogCodeSender)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests verifying a code and recovering the account with it.
///
/// Expected: Verification consumed once, recovery resolves the email's owner
#[tokio::test]
async fn verifies_and_recovers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    let user = factory::user::UserFactory::new(db).email(EMAIL).build().await?;
    factory::create_email_code(db, EMAIL).await?;
    let service = AuthService::new(db, &config);

    let verified = service.verify_code(EMAIL, "123456").await?;
    assert!(verified.success);

    let again = service.verify_code(EMAIL, "123456").await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    let recovered = service.recover(verified.verification_id).await?;
    assert_eq!(recovered.id, user.id);

    Ok(())
}

/// Tests a wrong code followed by the right one after attempts ran out.
///
/// Expected: Both rejected
#[tokio::test]
async fn rejects_exhausted_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    factory::user::UserFactory::new(db).email(EMAIL).build().await?;
    factory::email_verification_code::EmailCodeFactory::new(db, EMAIL)
        .attempts(config.max_verification_attempts - 1)
        .build()
        .await?;
    let service = AuthService::new(db, &config);

    let wrong = service.verify_code(EMAIL, "000000").await;
    assert!(matches!(wrong, Err(AppError::BadRequest(_))));

    let exhausted = service.verify_code(EMAIL, "123456").await;
    assert!(matches!(exhausted, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests recovering with an unused verification.
///
/// Expected: 400
#[tokio::test]
async fn recover_requires_used_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    factory::user::UserFactory::new(db).email(EMAIL).build().await?;
    let code = factory::create_email_code(db, EMAIL).await?;

    let result = AuthService::new(db, &config).recover(code.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reusing a verification for a second recovery.
///
/// Expected: First recovery succeeds, the replay is rejected with 400
#[tokio::test]
async fn recover_consumes_verification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    let user = factory::user::UserFactory::new(db).email(EMAIL).build().await?;
    factory::create_email_code(db, EMAIL).await?;
    let service = AuthService::new(db, &config);

    let verified = service.verify_code(EMAIL, "123456").await?;

    let first = service.recover(verified.verification_id).await?;
    assert_eq!(first.id, user.id);

    for _ in 0..2 {
        let replay = service.recover(verified.verification_id).await;
        assert!(matches!(replay, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests recovering with a verification older than the code lifetime.
///
/// Expected: 400
#[tokio::test]
async fn recover_rejects_stale_verification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    factory::user::UserFactory::new(db).email(EMAIL).build().await?;
    let verified_at =
        Utc::now() - Duration::minutes(config.verification_code_expires_minutes + 1);
    let code = factory::email_verification_code::EmailCodeFactory::new(db, EMAIL)
        .used_at(verified_at)
        .build()
        .await?;

    let result = AuthService::new(db, &config).recover(code.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
