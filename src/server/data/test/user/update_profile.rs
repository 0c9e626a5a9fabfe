use super::*;

/// Tests that only the provided fields are updated.
///
/// Expected: Ok(Some) with the wallet set and the display name unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let wallet = format!("0x{}", "a".repeat(40));

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateUserParam {
                wallet_address: Some(wallet.clone()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.wallet_address.as_deref(), Some(wallet.as_str()));
    assert_eq!(updated.x_display_name, user.x_display_name);
    assert!(updated.email.is_none());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            999,
            UpdateUserParam {
                email: Some("ghost@xylo.world".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
