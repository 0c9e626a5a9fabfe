use super::*;

fn video(video_id: &str, tags: &[&str], duration_seconds: i32) -> VideoDetails {
    VideoDetails {
        video_id: video_id.to_string(),
        title: format!("Video {}", video_id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        duration_seconds,
        view_count: 500,
        like_count: 40,
        comment_count: 3,
        ..Default::default()
    }
}

/// Tests crawling a verified channel with a tagged Short and an untagged video.
///
/// Expected: Both videos stored with today's snapshots, only the tagged one eligible,
/// and the channel statistics refreshed
#[tokio::test]
async fn stores_videos_and_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let channel = factory::youtube_channel::YoutubeChannelFactory::new(db, user.id)
        .channel_id(CHANNEL_ID)
        .verified(true)
        .build()
        .await?;
    let youtube = StubYoutube::new()
        .with_channel(CHANNEL_ID, "about")
        .with_video(video("short01", &["dance", "#xylo"], 45))
        .with_video(video("long01", &["vlog"], 600));

    let summary = CrawlService::new(db, &youtube).run(None).await?;

    assert_eq!(summary.channels, 1);
    assert_eq!(summary.videos, 2);
    assert_eq!(summary.failed, 0);

    let videos = YoutubeVideoRepository::new(db);
    let short = videos.find_by_video_id("short01").await?.unwrap();
    assert!(short.is_shorts);
    assert!(short.is_eligible);
    let long = videos.find_by_video_id("long01").await?.unwrap();
    assert!(!long.is_shorts);
    assert!(!long.is_eligible);

    let snapshots = SnapshotRepository::new(db);
    let today = kst_today();
    let snapshot = snapshots.find_video(short.id, today).await?.unwrap();
    assert_eq!(snapshot.view_count, 500);
    assert!(snapshots.find_channel(channel.id, today).await?.is_some());

    let refreshed = YoutubeChannelRepository::new(db)
        .find_by_id(channel.id)
        .await?
        .unwrap();
    assert_eq!(refreshed.subscriber_count, 1_234);

    Ok(())
}

/// Tests a channel YouTube no longer knows.
///
/// Expected: Counted as failed without aborting the run
#[tokio::test]
async fn counts_failed_channels() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_with_verified_channel(db).await?;
    let youtube = StubYoutube::new();

    let summary = CrawlService::new(db, &youtube).run(None).await?;

    assert_eq!(summary.channels, 0);
    assert_eq!(summary.failed, 1);

    Ok(())
}

/// Tests crawling without an API key.
///
/// Expected: Nothing crawled
#[tokio::test]
async fn skips_when_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_with_verified_channel(db).await?;
    let youtube = StubYoutube {
        disabled: true,
        ..Default::default()
    };

    let summary = CrawlService::new(db, &youtube).run(None).await?;

    assert_eq!(summary, Default::default());

    Ok(())
}
