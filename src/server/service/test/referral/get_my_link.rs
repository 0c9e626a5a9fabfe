use super::*;

/// Tests the referral link and its QR code URL.
///
/// Expected: Link on the frontend URL and a QR URL carrying the encoded link
#[tokio::test]
async fn builds_link_and_qr_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .referral_code("WITCH123")
        .build()
        .await?;

    let link = ReferralService::new(db)
        .get_my_link(user.id, "https://xylo.world/")
        .await?;

    assert_eq!(link.referral_url, "https://xylo.world/?ref=WITCH123");
    assert!(link
        .qr_code_url
        .starts_with("https://api.qrserver.com/v1/create-qr-code/?size=300x300&data="));
    assert!(link.qr_code_url.contains("%3Fref%3DWITCH123"));
    assert_eq!(link.stats.total_referrals, 0);

    Ok(())
}

/// Tests the tweet intent URL.
///
/// Expected: An X intent URL and a tweet text containing the link
#[tokio::test]
async fn builds_share_url() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .referral_code("WITCH123")
        .build()
        .await?;

    let share = ReferralService::new(db)
        .get_share_url(user.id, None, "https://xylo.world")
        .await?;

    assert!(share.share_url.starts_with("https://twitter.com/intent/tweet?text="));
    assert!(share.tweet_text.contains("https://xylo.world/?ref=WITCH123"));
    assert_eq!(share.share_type, "referral");

    let result = ReferralService::new(db)
        .get_share_url(user.id, Some("spam"), "https://xylo.world")
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
