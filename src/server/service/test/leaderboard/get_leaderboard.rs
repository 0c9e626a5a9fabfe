use super::*;

/// Tests paging through the latest snapshot.
///
/// Expected: Second page of two holds the third entry, with totals and page count
#[tokio::test]
async fn pages_latest_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, &[300, 200, 100]).await?;

    let page = LeaderboardService::new(db)
        .get_leaderboard(LeaderboardQuery {
            page: Some(2),
            limit: Some(2),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.period, "ALL");
    assert_eq!(page.snapshot_date, Some(snapshot_date()));
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].rank, 3);
    assert_eq!(page.entries[0].total_points, 100);

    Ok(())
}

/// Tests that older snapshots are ignored.
///
/// Expected: Only rows of the newest snapshot date are returned
#[tokio::test]
async fn uses_newest_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, &[300]).await?;
    let (user, channel) = factory::create_user_with_verified_channel(db).await?;
    factory::create_leaderboard_entry(
        db,
        user.id,
        channel.id,
        "ALL",
        1,
        50,
        snapshot_date() - Duration::days(1),
    )
    .await?;

    let page = LeaderboardService::new(db)
        .get_leaderboard(LeaderboardQuery::default())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.entries[0].total_points, 300);

    Ok(())
}

/// Tests ascending order on the total column.
///
/// Expected: Lowest total first
#[tokio::test]
async fn sorts_ascending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, &[300, 200, 100]).await?;

    let page = LeaderboardService::new(db)
        .get_leaderboard(LeaderboardQuery {
            sort: Some("asc".to_string()),
            ..Default::default()
        })
        .await?;

    let totals: Vec<i64> = page.entries.iter().map(|e| e.total_points).collect();
    assert_eq!(totals, vec![100, 200, 300]);

    Ok(())
}

/// Tests a period without any snapshot.
///
/// Expected: Empty page with a null snapshot date
#[tokio::test]
async fn empty_without_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, &[300]).await?;

    let page = LeaderboardService::new(db)
        .get_leaderboard(LeaderboardQuery {
            period: Some("1W".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.period, "1W");
    assert!(page.snapshot_date.is_none());
    assert_eq!(page.total, 0);
    assert!(page.entries.is_empty());

    Ok(())
}

/// Tests invalid query parameters.
///
/// Expected: 400 for a zero limit, an oversized limit, an unknown period and an unknown category
#[tokio::test]
async fn rejects_invalid_query() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = LeaderboardService::new(db);

    let queries = [
        LeaderboardQuery {
            limit: Some(0),
            ..Default::default()
        },
        LeaderboardQuery {
            limit: Some(101),
            ..Default::default()
        },
        LeaderboardQuery {
            period: Some("2Y".to_string()),
            ..Default::default()
        },
        LeaderboardQuery {
            category: Some("likes".to_string()),
            ..Default::default()
        },
    ];

    for query in queries {
        let result = service.get_leaderboard(query).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests a page number far past the end of the snapshot.
///
/// Expected: Empty page with the totals intact
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, &[300, 200]).await?;
    let service = LeaderboardService::new(db);

    for page in [u64::MAX / 2, u64::MAX] {
        let result = service
            .get_leaderboard(LeaderboardQuery {
                page: Some(page),
                limit: Some(100),
                ..Default::default()
            })
            .await?;

        assert_eq!(result.page, page);
        assert_eq!(result.total, 2);
        assert!(result.entries.is_empty());
    }

    let result = service
        .get_leaderboard(LeaderboardQuery {
            offset: Some(u64::MAX),
            ..Default::default()
        })
        .await?;
    assert!(result.entries.is_empty());

    Ok(())
}
