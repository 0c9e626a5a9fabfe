use super::*;

/// Tests claiming the User Pass with a verified YouTube account.
///
/// Expected: Ok with a minted SBT, the wallet stored and 2000 BOOST points credited
#[tokio::test]
async fn mints_pass_and_awards_boost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_social_account(db, user.id, "YOUTUBE").await?;

    let result = NftService::new(db).claim_user_pass(user.id, WALLET).await?;

    assert_eq!(result.nft.nft_type, "SBT");
    assert_eq!(result.nft.metadata["walletAddress"], WALLET);
    assert_eq!(
        result.message,
        "User Pass claimed successfully! +2000 Boost points awarded."
    );

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.wallet_address.as_deref(), Some(WALLET));

    let summary = PointRepository::new(db).find_summary(user.id).await?.unwrap();
    assert_eq!(summary.slot_06_boost, 2000);
    assert_eq!(summary.total_points, 2000);

    Ok(())
}

/// Tests claiming without any qualifying activity.
///
/// Expected: Err(BadRequest) and nothing minted
#[tokio::test]
async fn rejects_ineligible_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = NftService::new(db).claim_user_pass(user.id, WALLET).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(NftRepository::new(db)
        .get_by_user(user.id, None, None)
        .await?
        .is_empty());

    Ok(())
}

/// Tests claiming a second time.
///
/// Expected: Err(BadRequest) and eligibility reports the pass as claimed
#[tokio::test]
async fn rejects_second_claim() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_social_account(db, user.id, "YOUTUBE").await?;
    factory::create_user_pass(db, user.id).await?;

    let service = NftService::new(db);
    let eligibility = service.check_user_pass_eligibility(user.id).await?;
    assert!(eligibility.has_claimed);
    assert!(!eligibility.eligible);
    assert!(eligibility.conditions.is_none());

    let result = service.claim_user_pass(user.id, WALLET).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests claiming with a malformed wallet address.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_malformed_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_social_account(db, user.id, "YOUTUBE").await?;

    let result = NftService::new(db).claim_user_pass(user.id, "0x1234").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
