use super::*;

/// Tests that the latest date is read per period.
///
/// Expected: Ok(Some(latest)) for ALL, Ok(None) for a period without rows
#[tokio::test]
async fn returns_latest_date_for_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, channel) = factory::create_user_with_verified_channel(db).await?;
    let older = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    let newer = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
    factory::create_leaderboard_entry(db, user.id, channel.id, "ALL", 1, 100, older).await?;
    factory::create_leaderboard_entry(db, user.id, channel.id, "ALL", 1, 120, newer).await?;

    let repo = LeaderboardRepository::new(db);

    assert_eq!(
        repo.latest_snapshot_date(LeaderboardPeriod::All).await?,
        Some(newer)
    );
    assert_eq!(
        repo.latest_snapshot_date(LeaderboardPeriod::OneDay).await?,
        None
    );

    Ok(())
}
