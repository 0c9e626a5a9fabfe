use super::*;

async fn award(
    db: &sea_orm::DatabaseConnection,
    user_id: i32,
    category: PointCategory,
    amount: i64,
) -> Result<(), AppError> {
    PointService::new(db)
        .add_points(AwardPointsParam::new(
            user_id,
            category,
            amount,
            format!("{} award", category),
        ))
        .await?;

    Ok(())
}

/// Tests filtering the ledger by category.
///
/// Expected: Only matching transactions, newest first, with the filtered total
#[tokio::test]
async fn filters_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    award(db, user.id, PointCategory::Content, 100).await?;
    award(db, user.id, PointCategory::Event, 5).await?;
    award(db, user.id, PointCategory::Content, 200).await?;

    let history = PointService::new(db)
        .get_history(
            user.id,
            PointHistoryQuery {
                category: Some("content".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(history.total, 2);
    let amounts: Vec<i64> = history.transactions.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![200, 100]);

    Ok(())
}

/// Tests paging and date bounds.
///
/// Expected: Limit and offset echoed back, a past end date excludes everything
#[tokio::test]
async fn pages_and_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    for amount in [1, 2, 3] {
        award(db, user.id, PointCategory::Boost, amount).await?;
    }
    let service = PointService::new(db);

    let page = service
        .get_history(
            user.id,
            PointHistoryQuery {
                limit: Some(1),
                offset: Some(1),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(page.total, 3);
    assert_eq!(page.transactions.len(), 1);
    assert_eq!(page.transactions[0].amount, 2);
    assert_eq!((page.limit, page.offset), (1, 1));

    let past = service
        .get_history(
            user.id,
            PointHistoryQuery {
                end_date: Some("2020-01-01".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(past.total, 0);

    Ok(())
}

/// Tests malformed queries.
///
/// Expected: 400 for an unknown category, a bad date and a zero limit
#[tokio::test]
async fn rejects_invalid_query() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = PointService::new(db);

    let queries = [
        PointHistoryQuery {
            category: Some("LOTTERY".to_string()),
            ..Default::default()
        },
        PointHistoryQuery {
            start_date: Some("yesterday".to_string()),
            ..Default::default()
        },
        PointHistoryQuery {
            limit: Some(0),
            ..Default::default()
        },
    ];

    for query in queries {
        let result = service.get_history(user.id, query).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
