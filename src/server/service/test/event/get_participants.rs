use super::*;

/// Tests listing participants of a vote.
///
/// Expected: Both voters with user basics and the summed vote weight
#[tokio::test]
async fn sums_vote_weight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let alice = factory::create_user(db).await?;
    factory::create_user_points(db, alice.id, 500).await?;
    service.participate(alice.id, dto("VOTE", "vote-1")).await?;

    let bob = factory::create_user(db).await?;
    factory::create_user_points(db, bob.id, 320).await?;
    service.participate(bob.id, dto("VOTE", "vote-1")).await?;

    let result = service.get_participants("vote-1").await?;

    assert_eq!(result.event_id, "vote-1");
    assert_eq!(result.total_participants, 2);
    assert_eq!(result.total_vote_weight, 8);
    assert_eq!(
        result.participants[0].user.as_ref().map(|u| u.id),
        Some(alice.id)
    );

    Ok(())
}

/// Tests an event nobody joined.
///
/// Expected: Empty list with zero totals
#[tokio::test]
async fn empty_event_has_zero_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventService::new(db).get_participants("nobody").await?;

    assert_eq!(result.total_participants, 0);
    assert_eq!(result.total_vote_weight, 0);
    assert!(result.participants.is_empty());

    Ok(())
}
