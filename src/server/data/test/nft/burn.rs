use super::*;

/// Tests burning an NFT with replacement metadata.
///
/// Expected: Ok with is_burned, burned_at and the new metadata stored
#[tokio::test]
async fn burns_and_replaces_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let nft = factory::user_nft::UserNftFactory::new(db, user.id)
        .nft_type("REWARD")
        .build()
        .await?;

    let repo = NftRepository::new(db);
    let burned = repo
        .burn(nft, Utc::now(), Some(json!({ "burnReason": "test" })))
        .await?;

    assert!(burned.is_burned);
    assert!(burned.burned_at.is_some());
    assert_eq!(burned.metadata["burnReason"], "test");

    Ok(())
}
