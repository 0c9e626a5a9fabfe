use super::*;

/// Tests that a user can participate in an event only once.
///
/// Expected: Err from the (user_id, event_id) unique index on the second insert
#[tokio::test]
async fn rejects_duplicate_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = EventRepository::new(db);
    repo.create(user.id, param(EventType::Contest, "contest-1"))
        .await?;
    let duplicate = repo
        .create(user.id, param(EventType::Contest, "contest-1"))
        .await;

    assert!(duplicate.is_err());
    assert!(repo.find(user.id, "contest-1").await?.is_some());

    Ok(())
}

/// Tests listing participations by user and by event.
///
/// Expected: Ok with the type filter applied and the event list holding both users
#[tokio::test]
async fn lists_by_user_and_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = EventRepository::new(db);
    repo.create(alice.id, param(EventType::Vote, "vote-1")).await?;
    repo.create(alice.id, param(EventType::Community, "meetup-1"))
        .await?;
    repo.create(bob.id, param(EventType::Vote, "vote-1")).await?;

    let votes = repo.get_by_user(alice.id, Some(EventType::Vote)).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].event_id, "vote-1");

    let everything = repo.get_by_user(alice.id, None).await?;
    assert_eq!(everything.len(), 2);

    let participants = repo.get_by_event("vote-1").await?;
    assert_eq!(
        participants.iter().map(|p| p.user_id).collect::<Vec<_>>(),
        vec![alice.id, bob.id]
    );

    Ok(())
}
