use super::*;

/// Tests that burned NFTs are ignored and the highest tier wins.
///
/// Expected: Ok(Some) with the unburned tier 3 NFT
#[tokio::test]
async fn returns_highest_unburned_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_tier_nft(db, user.id, 2).await?;
    factory::user_nft::UserNftFactory::new(db, user.id)
        .nft_type("TIER")
        .tier(4)
        .burned(true)
        .build()
        .await?;
    let tier3 = factory::create_tier_nft(db, user.id, 3).await?;

    let repo = NftRepository::new(db);
    let active = repo.find_active(user.id, NftType::Tier, None).await?;

    assert_eq!(active.map(|n| n.id), Some(tier3.id));

    Ok(())
}

/// Tests matching the User Pass by name.
///
/// Expected: Ok(Some) for "XYLO User Pass", Ok(None) for another name
#[tokio::test]
async fn filters_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_user_pass(db, user.id).await?;

    let repo = NftRepository::new(db);

    assert!(repo
        .find_active(user.id, NftType::Sbt, Some("XYLO User Pass"))
        .await?
        .is_some());
    assert!(repo
        .find_active(user.id, NftType::Sbt, Some("Other Pass"))
        .await?
        .is_none());

    Ok(())
}
