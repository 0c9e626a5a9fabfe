use super::*;

/// Tests verification when the description contains the code.
///
/// Expected: Ok with a verified channel and a verified YOUTUBE social account
#[tokio::test]
async fn verifies_when_code_in_description() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let channel = factory::youtube_channel::YoutubeChannelFactory::new(db, user.id)
        .channel_id(CHANNEL_ID)
        .verification_code("XYLO1234")
        .build()
        .await?;
    let youtube = StubYoutube::new().with_channel(CHANNEL_ID, "my channel XYLO1234 welcome");

    let verified = YoutubeService::new(db, &youtube)
        .verify_channel(user.id, channel.id)
        .await?;

    assert!(verified.is_verified);
    assert!(verified.verified_at.is_some());
    assert!(
        SocialAccountRepository::new(db)
            .has_verified(user.id, Platform::Youtube)
            .await?
    );

    let history = ChannelVerificationHistoryRepository::new(db)
        .get_by_channel_id(CHANNEL_ID)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action_type, "VERIFICATION_SUCCESS");

    Ok(())
}

/// Tests verification when the code is missing from the description.
///
/// Expected: Err(BadRequest) with the attempt counted and a FAILED history row kept
#[tokio::test]
async fn counts_failed_attempt() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let channel = factory::youtube_channel::YoutubeChannelFactory::new(db, user.id)
        .channel_id(CHANNEL_ID)
        .verification_code("XYLO1234")
        .build()
        .await?;
    let youtube = StubYoutube::new().with_channel(CHANNEL_ID, "nothing here");

    let result = YoutubeService::new(db, &youtube)
        .verify_channel(user.id, channel.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = YoutubeChannelRepository::new(db)
        .find_by_id(channel.id)
        .await?
        .unwrap();
    assert!(!stored.is_verified);
    assert_eq!(stored.verification_attempts, 1);

    let history = ChannelVerificationHistoryRepository::new(db)
        .get_by_channel_id(CHANNEL_ID)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action_type, "VERIFICATION_FAILED");

    Ok(())
}

/// Tests verifying a channel of another user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_channels_of_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let channel = factory::create_channel(db, owner.id).await?;
    let youtube = StubYoutube::new();

    let result = YoutubeService::new(db, &youtube)
        .verify_channel(other.id, channel.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests verifying a channel that is already verified.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_already_verified_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, channel) = factory::create_user_with_verified_channel(db).await?;
    let youtube = StubYoutube::new();

    let result = YoutubeService::new(db, &youtube)
        .verify_channel(user.id, channel.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
