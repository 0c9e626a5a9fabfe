use super::*;

/// Tests paging and status filtering of own claims.
///
/// Expected: Only the user's PENDING claims, two per page
#[tokio::test]
async fn pages_and_filters_claims() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_claim(db, user.id, "PENDING", 100.0).await?;
    }
    factory::create_claim(db, user.id, "REJECTED", 100.0).await?;
    factory::create_claim(db, other.id, "PENDING", 100.0).await?;

    let result = XltClaimService::new(db)
        .get_my_claims(
            user.id,
            ClaimListQuery {
                status: Some("pending".to_string()),
                page: Some(2),
                limit: Some(2),
            },
        )
        .await?;

    assert_eq!(result.total, 3);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.claims.len(), 1);
    assert!(result.claims.iter().all(|c| c.status == "PENDING"));

    Ok(())
}

/// Tests an unknown status filter.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = XltClaimService::new(db)
        .get_my_claims(
            user.id,
            ClaimListQuery {
                status: Some("LOST".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a page number far past the last claim.
///
/// Expected: Empty list with the total intact
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_claim(db, user.id, "PENDING", 100.0).await?;

    let result = XltClaimService::new(db)
        .get_my_claims(
            user.id,
            ClaimListQuery {
                status: None,
                page: Some(u64::MAX),
                limit: Some(10),
            },
        )
        .await?;

    assert_eq!(result.total, 1);
    assert!(result.claims.is_empty());

    Ok(())
}
