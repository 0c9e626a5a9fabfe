use super::*;

/// Tests that re-crawling on the same day overwrites that day's snapshot.
///
/// Expected: Ok with a single row carrying the latest counters
#[tokio::test]
async fn overwrites_same_day_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, channel) = factory::create_user_with_verified_channel(db).await?;
    let video = factory::create_video(db, channel.id).await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let repo = SnapshotRepository::new(db);
    let first = repo
        .upsert_video(video.id, date, Engagement::new(10, 1, 0))
        .await?;
    let second = repo
        .upsert_video(video.id, date, Engagement::new(25, 4, 2))
        .await?;

    assert_eq!(first.id, second.id);

    let stored = repo.find_video(video.id, date).await?.unwrap();
    assert_eq!(stored.view_count, 25);
    assert_eq!(stored.like_count, 4);
    assert_eq!(stored.comment_count, 2);

    Ok(())
}

/// Tests that channel snapshots copy the channel's current statistics.
///
/// Expected: Ok with the subscriber count of the channel row
#[tokio::test]
async fn stores_channel_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let channel = factory::youtube_channel::YoutubeChannelFactory::new(db, user.id)
        .subscriber_count(1234)
        .verified(true)
        .build()
        .await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let repo = SnapshotRepository::new(db);
    repo.upsert_channel(&channel, date).await?;

    let stored = repo.find_channel(channel.id, date).await?.unwrap();
    assert_eq!(stored.subscriber_count, 1234);

    Ok(())
}
