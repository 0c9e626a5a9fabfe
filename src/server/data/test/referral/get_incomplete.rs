use super::*;

/// Tests that completed referrals are excluded from the completion check.
///
/// Expected: Ok with only the incomplete referral
#[tokio::test]
async fn skips_completed_referrals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let referrer = factory::create_user(db).await?;
    let done = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    factory::referral::ReferralFactory::new(db, referrer.id, done.id)
        .discord_joined(true)
        .completed(true)
        .build()
        .await?;
    let open = factory::create_referral(db, referrer.id, pending.id).await?;

    let repo = ReferralRepository::new(db);
    let incomplete = repo.get_incomplete().await?;

    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, open.id);

    Ok(())
}

/// Tests updating progress flags without completing the referral.
///
/// Expected: Ok with both flags stored and is_completed still false
#[tokio::test]
async fn updates_progress_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let referrer = factory::create_user(db).await?;
    let referee = factory::create_user(db).await?;
    let referral = factory::create_referral(db, referrer.id, referee.id).await?;

    let repo = ReferralRepository::new(db);
    let updated = repo
        .update_progress(
            referral,
            ReferralProgress {
                is_discord_joined: true,
                is_video_posted: true,
            },
        )
        .await?;

    assert!(updated.is_discord_joined);
    assert!(updated.is_video_posted);
    assert!(!updated.is_completed);

    Ok(())
}
