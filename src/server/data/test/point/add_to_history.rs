use super::*;

/// Tests that awards on the same day share one roll-up row.
///
/// Expected: Ok with one row per date and day_total summing every category
#[tokio::test]
async fn rolls_up_per_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let day1 = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let day2 = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();

    let repo = PointRepository::new(db);
    repo.add_to_history(user.id, day1, PointCategory::Content, 30).await?;
    repo.add_to_history(user.id, day1, PointCategory::Event, 5).await?;
    repo.add_to_history(user.id, day2, PointCategory::Boost, 7).await?;

    let history = repo.get_history_since(user.id, day1).await?;
    assert_eq!(history.len(), 2);

    // newest first
    assert_eq!(history[0].date, day2);
    assert_eq!(history[0].boost, 7);
    assert_eq!(history[1].contents, 30);
    assert_eq!(history[1].event, 5);
    assert_eq!(history[1].day_total, 35);

    Ok(())
}
