use super::*;

/// Tests the referral "video posted" check.
///
/// Only eligible videos published at or after the cutoff count.
///
/// Expected: false with only an old video and an ineligible one, true after
/// an eligible recent upload
#[tokio::test]
async fn requires_recent_eligible_video() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_youtube_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, channel) = factory::create_user_with_verified_channel(db).await?;
    let cutoff = Utc::now() - Duration::days(1);

    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .published_at(cutoff - Duration::days(3))
        .build()
        .await?;
    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .published_at(Utc::now())
        .eligible(false)
        .build()
        .await?;

    let repo = YoutubeVideoRepository::new(db);
    assert!(!repo.has_eligible_since(vec![channel.id], cutoff).await?);
    assert!(!repo.has_eligible_since(vec![], cutoff).await?);

    factory::youtube_video::YoutubeVideoFactory::new(db, channel.id)
        .published_at(Utc::now())
        .build()
        .await?;

    assert!(repo.has_eligible_since(vec![channel.id], cutoff).await?);

    Ok(())
}
