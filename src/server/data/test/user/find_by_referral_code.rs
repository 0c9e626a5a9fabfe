use super::*;

/// Tests looking up a user by referral code.
///
/// Expected: Ok(Some) for the owner's code, Ok(None) for an unknown code
#[tokio::test]
async fn finds_user_by_referral_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .referral_code("WITCH1")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_referral_code("WITCH1").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let missing = repo.find_by_referral_code("NOPE00").await?;
    assert!(missing.is_none());

    Ok(())
}
