use super::*;

/// Tests aggregates over the snapshot totals.
///
/// Expected: Count, rounded average, sum, max and min of total_current
#[tokio::test]
async fn aggregates_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, &[300, 200, 101]).await?;

    let stats = LeaderboardService::new(db).get_stats(None).await?.unwrap();

    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.total_points, 601);
    assert_eq!(stats.average_points, 200);
    assert_eq!(stats.max_points, 300);
    assert_eq!(stats.min_points, 101);

    Ok(())
}

/// Tests stats before any snapshot exists.
///
/// Expected: None
#[tokio::test]
async fn none_without_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = LeaderboardService::new(db).get_stats(Some("1M")).await?;

    assert!(stats.is_none());

    Ok(())
}
