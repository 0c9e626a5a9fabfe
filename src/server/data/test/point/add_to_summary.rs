use super::*;

/// Tests that the first award creates the summary row.
///
/// Expected: Ok with the slot and the total both equal to the award
#[tokio::test]
async fn creates_summary_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_point_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PointRepository::new(db);
    repo.add_to_summary(user.id, PointCategory::Referral, 10).await?;

    let summary = repo.find_summary(user.id).await?.unwrap();
    assert_eq!(summary.slot_02_mgm, 10);
    assert_eq!(summary.slot_01_content, 0);
    assert_eq!(summary.total_points, 10);

    Ok(())
}

/// Tests that awards in different categories accumulate into the total.
///
/// Expected: Ok with each slot holding its own sum and the total holding all
#[tokio::test]
async fn accumulates_slots_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_point_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PointRepository::new(db);
    repo.add_to_summary(user.id, PointCategory::Content, 150).await?;
    repo.add_to_summary(user.id, PointCategory::Content, 50).await?;
    repo.add_to_summary(user.id, PointCategory::Boost, 2000).await?;

    let summary = repo.find_summary(user.id).await?.unwrap();
    assert_eq!(summary.slot_01_content, 200);
    assert_eq!(summary.slot_06_boost, 2000);
    assert_eq!(summary.total_points, 2200);

    Ok(())
}
