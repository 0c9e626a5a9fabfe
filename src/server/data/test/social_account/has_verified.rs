use super::*;

/// Tests that only verified accounts on the requested platform count.
///
/// Expected: false for an unverified Discord account and for YouTube, true
/// once Discord is verified
#[tokio::test]
async fn requires_verified_account_on_platform() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SocialAccountRepository::new(db);
    repo.upsert(discord_param(user.id, false)).await?;

    assert!(!repo.has_verified(user.id, Platform::Discord).await?);
    assert!(!repo.has_verified(user.id, Platform::Youtube).await?);

    repo.upsert(discord_param(user.id, true)).await?;

    assert!(repo.has_verified(user.id, Platform::Discord).await?);

    Ok(())
}
