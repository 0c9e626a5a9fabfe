use super::*;

/// Tests global claim statistics.
///
/// Expected: Only APPROVED and COMPLETED claims count toward the claimed total
#[tokio::test]
async fn counts_allocated_claims_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_claim(db, user.id, "APPROVED", 1_000.0).await?;
    factory::create_claim(db, user.id, "COMPLETED", 234.5).await?;
    factory::create_claim(db, user.id, "PENDING", 10_000.0).await?;

    let stats = XltClaimService::new(db).get_stats().await?;

    assert_eq!(stats.total_requests, 3);
    assert_eq!(stats.total_xlt_claimed, 1_234.5);
    assert_eq!(stats.remaining_xlt, MAX_TOTAL_SUPPLY - 1_234.5);
    assert_eq!(stats.progress_percentage, 0.25);
    assert_eq!(stats.exchange_rate, 200);
    assert_eq!(stats.mvp_end_date, "2026-06-30T14:59:59.000Z");

    Ok(())
}
