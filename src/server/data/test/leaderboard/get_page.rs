use super::*;

/// Tests ordering a snapshot by a category in both directions.
///
/// Expected: Ok with rows sorted by total_current and the snapshot's row count
#[tokio::test]
async fn orders_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    for (rank, total) in [(1, 50), (2, 300), (3, 10)] {
        let (user, channel) = factory::create_user_with_verified_channel(db).await?;
        factory::create_leaderboard_entry(db, user.id, channel.id, "ALL", rank, total, date)
            .await?;
    }

    let repo = LeaderboardRepository::new(db);

    let (desc, total) = repo
        .get_page(
            LeaderboardPeriod::All,
            date,
            LeaderboardCategory::Total,
            SortOrder::Desc,
            10,
            0,
        )
        .await?;
    assert_eq!(total, 3);
    assert_eq!(
        desc.iter().map(|e| e.total_current).collect::<Vec<_>>(),
        vec![300, 50, 10]
    );

    let (asc, _) = repo
        .get_page(
            LeaderboardPeriod::All,
            date,
            LeaderboardCategory::Total,
            SortOrder::Asc,
            2,
            0,
        )
        .await?;
    assert_eq!(
        asc.iter().map(|e| e.total_current).collect::<Vec<_>>(),
        vec![10, 50]
    );

    Ok(())
}

/// Tests that rows from another snapshot date are not included.
///
/// Expected: Ok with only the requested date's rows
#[tokio::test]
async fn excludes_other_snapshot_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, channel) = factory::create_user_with_verified_channel(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
    let previous = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    factory::create_leaderboard_entry(db, user.id, channel.id, "ALL", 1, 100, previous).await?;
    factory::create_leaderboard_entry(db, user.id, channel.id, "ALL", 1, 200, date).await?;

    let repo = LeaderboardRepository::new(db);
    let (entries, total) = repo
        .get_page(
            LeaderboardPeriod::All,
            date,
            LeaderboardCategory::Contents,
            SortOrder::Desc,
            10,
            0,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(entries[0].total_current, 200);

    Ok(())
}
