use super::*;

/// Tests flagging the referee's referral after joining the Discord server.
///
/// Expected: Ok(1) on the first call, Ok(0) once the flag is already set
#[tokio::test]
async fn flags_referee_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let referrer = factory::create_user(db).await?;
    let referee = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;
    factory::create_referral(db, referrer.id, referee.id).await?;
    factory::create_referral(db, referrer.id, bystander.id).await?;

    let repo = ReferralRepository::new(db);

    assert_eq!(repo.mark_discord_joined(referee.id).await?, 1);
    assert_eq!(repo.mark_discord_joined(referee.id).await?, 0);

    let flagged = repo.find_by_referee(referee.id).await?.unwrap();
    assert!(flagged.is_discord_joined);
    let untouched = repo.find_by_referee(bystander.id).await?.unwrap();
    assert!(!untouched.is_discord_joined);

    Ok(())
}
