use super::*;

/// Tests finding another user's pending registration of the same channel.
///
/// Expected: Ok(Some) for the pending row, Ok(None) when it is excluded by id
#[tokio::test]
async fn finds_pending_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_youtube_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let channel = factory::youtube_channel::YoutubeChannelFactory::new(db, user.id)
        .channel_id("UCxxxxxxxxxxxxxxxxxxxxxx")
        .build()
        .await?;

    let repo = YoutubeChannelRepository::new(db);

    let pending = repo
        .find_pending_by_channel_id("UCxxxxxxxxxxxxxxxxxxxxxx", None)
        .await?;
    assert_eq!(pending.map(|c| c.id), Some(channel.id));

    let excluded = repo
        .find_pending_by_channel_id("UCxxxxxxxxxxxxxxxxxxxxxx", Some(channel.id))
        .await?;
    assert!(excluded.is_none());

    Ok(())
}

/// Tests that verified rows are not reported as pending.
///
/// Expected: Ok(None) for pending, Ok(Some) for verified
#[tokio::test]
async fn ignores_verified_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_youtube_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let channel = factory::create_verified_channel(db, user.id).await?;

    let repo = YoutubeChannelRepository::new(db);

    assert!(repo
        .find_pending_by_channel_id(&channel.channel_id, None)
        .await?
        .is_none());
    assert!(repo
        .find_verified_by_channel_id(&channel.channel_id)
        .await?
        .is_some());

    Ok(())
}
