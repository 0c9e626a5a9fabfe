use super::*;

/// Tests the first login of an X identity.
///
/// Expected: User with a 6 character referral code, zeroed summary and verified X account
#[tokio::test]
async fn registers_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();

    let user = AuthService::new(db, &config)
        .login_or_register(&x_profile("1001", "witch"))
        .await?;

    assert_eq!(user.x_handle, "witch");
    assert_eq!(user.referral_code.len(), 6);

    let summary = PointRepository::new(db).find_summary(user.id).await?.unwrap();
    assert_eq!(summary.total_points, 0);

    let accounts = SocialAccountRepository::new(db).get_by_user(user.id).await?;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].platform, "X");
    assert!(accounts[0].is_verified);

    Ok(())
}

/// Tests logging in again with a changed handle.
///
/// Expected: Same user with the refreshed handle, still one X account
#[tokio::test]
async fn reuses_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::default();
    let service = AuthService::new(db, &config);

    let first = service.login_or_register(&x_profile("1001", "witch")).await?;
    let second = service
        .login_or_register(&x_profile("1001", "witch_renamed"))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.referral_code, second.referral_code);
    assert_eq!(second.x_handle, "witch_renamed");

    let accounts = SocialAccountRepository::new(db).get_by_user(first.id).await?;
    assert_eq!(accounts.len(), 1);

    Ok(())
}
