use super::*;

/// Tests that private, unprocessed and ineligible videos are not scored.
///
/// Expected: Ok with only the eligible, public, processed video
#[tokio::test]
async fn returns_only_scorable_videos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_youtube_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, channel) = factory::create_user_with_verified_channel(db).await?;
    let scorable = factory::create_video(db, channel.id).await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .privacy_status("private")
        .build()
        .await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .upload_status("uploaded")
        .build()
        .await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .eligible(false)
        .build()
        .await?;

    let repo = YoutubeVideoRepository::new(db);
    let videos = repo.get_scorable_by_channel(channel.id).await?;

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, scorable.id);

    Ok(())
}
