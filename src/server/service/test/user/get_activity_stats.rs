use super::*;

/// Tests totals over videos on the user's verified channel.
///
/// Expected: Sums of views, likes and comments with comments weighted three times
#[tokio::test]
async fn sums_recent_videos() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, channel) = factory::create_user_with_verified_channel(db).await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .stats(1_000, 100, 10)
        .build()
        .await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .stats(500, 50, 5)
        .build()
        .await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .stats(9_000, 0, 0)
        .published_at(chrono::Utc::now() - chrono::Duration::days(30))
        .build()
        .await?;

    let stats = UserService::new(db).get_activity_stats(user.id, None).await?;

    assert_eq!(stats.period, "7d");
    assert_eq!(stats.total_videos, 2);
    assert_eq!(stats.total_views, 1_500);
    assert_eq!(stats.total_likes, 150);
    assert_eq!(stats.total_comments, 15);
    assert_eq!(stats.points_earned.from_comments, 45);
    assert_eq!(stats.points_earned.total, 1_695);
    assert_eq!(stats.top_videos.len(), 2);

    Ok(())
}

/// Tests an unsupported period.
///
/// Expected: 400
#[tokio::test]
async fn rejects_unknown_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .get_activity_stats(user.id, Some("1y"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
