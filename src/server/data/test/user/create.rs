use super::*;

/// Tests creating a user from an X profile.
///
/// Verifies that the X identity and the referral code are stored and that the
/// account starts as a non-admin with X as its primary platform.
///
/// Expected: Ok with the profile fields copied
#[tokio::test]
async fn creates_user_from_x_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            &XProfile {
                x_id: "1234".to_string(),
                handle: "witch".to_string(),
                display_name: "The Witch".to_string(),
                profile_image_url: Some("https://pbs.twimg.com/witch.png".to_string()),
            },
            "ABC123",
        )
        .await?;

    assert_eq!(user.x_id, "1234");
    assert_eq!(user.x_handle, "witch");
    assert_eq!(user.referral_code, "ABC123");
    assert_eq!(user.primary_platform, "X");
    assert!(!user.is_admin);
    assert!(!user.has_completed_tutorial);

    Ok(())
}

/// Tests that a duplicate X id is rejected.
///
/// Expected: Err from the unique constraint on x_id
#[tokio::test]
async fn rejects_duplicate_x_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(
            &XProfile {
                x_id: existing.x_id.clone(),
                handle: "other".to_string(),
                display_name: "Other".to_string(),
                profile_image_url: None,
            },
            "ZZZ999",
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
