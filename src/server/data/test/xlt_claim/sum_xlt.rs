use super::*;

/// Tests summing allocated XLT across users.
///
/// Only APPROVED and COMPLETED claims count toward the allocated supply.
///
/// Expected: Ok(150.0)
#[tokio::test]
async fn sums_allocated_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_claim(db, alice.id, "APPROVED", 100.0).await?;
    factory::create_claim(db, bob.id, "COMPLETED", 50.0).await?;
    factory::create_claim(db, bob.id, "PENDING", 1000.0).await?;
    factory::create_claim(db, alice.id, "REJECTED", 7.0).await?;

    let repo = XltClaimRepository::new(db);

    assert_eq!(repo.sum_xlt(&ClaimStatus::allocated()).await?, 150.0);
    assert_eq!(repo.count_all().await?, 4);

    Ok(())
}

/// Tests the sum over an empty table.
///
/// Expected: Ok(0.0)
#[tokio::test]
async fn returns_zero_without_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = XltClaimRepository::new(db);

    assert_eq!(repo.sum_xlt(&ClaimStatus::allocated()).await?, 0.0);

    Ok(())
}
