use super::*;

/// Tests the per-platform link state.
///
/// Expected: YouTube connected, X not connected, Instagram and Discord coming soon
#[tokio::test]
async fn reports_each_platform() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_social_account(db, user.id, "YOUTUBE").await?;

    let accounts = UserService::new(db).get_social_accounts(user.id).await?;

    assert_eq!(accounts.youtube.status, "connected");
    assert_eq!(accounts.youtube.is_verified, Some(true));
    assert_eq!(accounts.x.status, "not_connected");
    assert_eq!(accounts.discord.status, "coming_soon");
    assert_eq!(accounts.instagram.status, "coming_soon");
    assert_eq!(accounts.instagram.message.as_deref(), Some("Coming soon..."));

    Ok(())
}
