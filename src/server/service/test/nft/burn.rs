use super::*;

/// Tests burning an owned reward NFT.
///
/// Expected: Ok with the NFT burned and the reason merged into its metadata
#[tokio::test]
async fn burns_reward_nft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let nft = factory::user_nft::UserNftFactory::new(db, user.id)
        .nft_type("REWARD")
        .build()
        .await?;

    let result = NftService::new(db)
        .burn(user.id, nft.id, Some("cleanup".to_string()))
        .await?;

    assert!(result.nft.is_burned);
    assert_eq!(result.nft.metadata["burnReason"], "cleanup");
    assert_eq!(result.nft.metadata["burnedBy"], user.id);

    Ok(())
}

/// Tests burning a soul-bound token.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn refuses_to_burn_sbt() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let pass = factory::create_user_pass(db, user.id).await?;

    let result = NftService::new(db).burn(user.id, pass.id, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests burning someone else's NFT.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn refuses_to_burn_foreign_nft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let nft = factory::user_nft::UserNftFactory::new(db, owner.id)
        .nft_type("CONNECTION")
        .build()
        .await?;

    let result = NftService::new(db).burn(other.id, nft.id, None).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests burning an NFT twice.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn refuses_to_burn_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let nft = factory::user_nft::UserNftFactory::new(db, user.id)
        .nft_type("REWARD")
        .burned(true)
        .build()
        .await?;

    let result = NftService::new(db).burn(user.id, nft.id, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
