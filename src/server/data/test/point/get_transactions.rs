use super::*;

/// Tests filtering transactions by category with pagination.
///
/// Expected: Ok with only CONTENT rows, newest first, and the filtered total
#[tokio::test]
async fn filters_by_category_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_point_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PointRepository::new(db);
    for (category, amount) in [
        (PointCategory::Content, 1),
        (PointCategory::Referral, 10),
        (PointCategory::Content, 2),
        (PointCategory::Content, 3),
    ] {
        repo.insert_transaction(&AwardPointsParam::new(user.id, category, amount, "test"))
            .await?;
    }

    let (transactions, total) = repo
        .get_transactions(
            user.id,
            &TransactionFilter {
                category: Some(PointCategory::Content),
                limit: 2,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(total, 3);
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].amount, 3);
    assert_eq!(transactions[1].amount, 2);
    assert!(transactions.iter().all(|t| t.category == "CONTENT"));

    Ok(())
}

/// Tests that other users' transactions are excluded.
///
/// Expected: Ok with an empty list and a zero total
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_point_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = PointRepository::new(db);
    repo.insert_transaction(&AwardPointsParam::new(
        other.id,
        PointCategory::Event,
        100,
        "vote",
    ))
    .await?;

    let (transactions, total) = repo
        .get_transactions(
            user.id,
            &TransactionFilter {
                limit: 30,
                ..Default::default()
            },
        )
        .await?;

    assert!(transactions.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
