use super::*;

/// Tests the leaderboard ranking order.
///
/// Expected: Ok with verified channels only, largest subscriber count first
#[tokio::test]
async fn orders_verified_channels_by_subscribers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_youtube_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for (subscribers, verified) in [(100, true), (5000, true), (9999, false), (700, true)] {
        factory::youtube_channel::YoutubeChannelFactory::new(db, user.id)
            .subscriber_count(subscribers)
            .verified(verified)
            .build()
            .await?;
    }

    let repo = YoutubeChannelRepository::new(db);
    let channels = repo.get_verified_by_subscribers().await?;

    assert_eq!(
        channels
            .iter()
            .map(|c| c.subscriber_count)
            .collect::<Vec<_>>(),
        vec![5000, 700, 100]
    );

    Ok(())
}
