use super::*;

/// Tests voting with 1 250 points.
///
/// Expected: Ok with a weight of 12, ignoring the weight the caller sent
#[tokio::test]
async fn derives_vote_weight_from_points() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_user_points(db, user.id, 1_250).await?;

    let participation = EventService::new(db)
        .participate(user.id, dto("VOTE", "vote-1"))
        .await?;

    assert_eq!(participation.event_type, "VOTE");
    assert_eq!(participation.vote_weight, Some(12));
    assert!(!participation.is_winner);

    Ok(())
}

/// Tests voting with fewer than 100 points.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_vote_without_weight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_user_points(db, user.id, 99).await?;

    let result = EventService::new(db)
        .participate(user.id, dto("VOTE", "vote-1"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests voting without a point summary.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_vote_without_summary() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = EventService::new(db)
        .participate(user.id, dto("vote", "vote-1"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests joining the same event twice.
///
/// Expected: Err(BadRequest) on the second attempt
#[tokio::test]
async fn rejects_duplicate_participation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = EventService::new(db);

    let first = service
        .participate(user.id, dto("CONTEST", "contest-1"))
        .await?;
    assert_eq!(first.vote_weight, Some(9_999));

    let second = service
        .participate(user.id, dto("CONTEST", "contest-1"))
        .await;
    assert!(matches!(second, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests filtering own participations by a lower-case type.
///
/// Expected: Only the matching participation is returned
#[tokio::test]
async fn filters_participations_by_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = EventService::new(db);
    service
        .participate(user.id, dto("CONTEST", "contest-1"))
        .await?;
    service
        .participate(user.id, dto("COMMUNITY", "meetup-1"))
        .await?;

    let contests = service
        .get_my_participations(user.id, Some("contest"))
        .await?;

    assert_eq!(contests.len(), 1);
    assert_eq!(contests[0].event_id, "contest-1");
    assert_eq!(service.get_my_participations(user.id, None).await?.len(), 2);

    Ok(())
}
