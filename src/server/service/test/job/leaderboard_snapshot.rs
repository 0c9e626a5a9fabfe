use super::*;

/// Tests ranking channels by subscribers.
///
/// Expected: One row per scored channel in each period, owners without a
/// summary skipped while keeping their rank slot
#[tokio::test]
async fn ranks_channels_by_subscribers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let big = factory::create_user(db).await?;
    factory::create_user_points(db, big.id, 5_000).await?;
    factory::youtube_channel::YoutubeChannelFactory::new(db, big.id)
        .subscriber_count(10_000)
        .verified(true)
        .build()
        .await?;

    let unscored = factory::create_user(db).await?;
    factory::youtube_channel::YoutubeChannelFactory::new(db, unscored.id)
        .subscriber_count(5_000)
        .verified(true)
        .build()
        .await?;

    let small = factory::create_user(db).await?;
    factory::create_user_points(db, small.id, 9_000).await?;
    factory::youtube_channel::YoutubeChannelFactory::new(db, small.id)
        .subscriber_count(100)
        .verified(true)
        .build()
        .await?;

    let date = kst_today();
    let stored = LeaderboardSnapshotService::new(db).run_for(date).await?;
    assert_eq!(stored, 2);

    let rows = LeaderboardRepository::new(db)
        .get_snapshot(LeaderboardPeriod::OneWeek, date)
        .await?;
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].user_id, rows[0].rank), (big.id, 1));
    assert_eq!((rows[1].user_id, rows[1].rank), (small.id, 3));
    assert_eq!(rows[1].total_current, 9_000);

    Ok(())
}

/// Tests running the snapshot twice on the same day.
///
/// Expected: Rows replaced in place rather than duplicated
#[tokio::test]
async fn rerun_replaces_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_user_with_verified_channel(db).await?;
    factory::create_user_points(db, user.id, 100).await?;

    let date = kst_today();
    let service = LeaderboardSnapshotService::new(db);
    service.run_for(date).await?;
    service.run_for(date).await?;

    let rows = LeaderboardRepository::new(db)
        .get_snapshot(LeaderboardPeriod::All, date)
        .await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
