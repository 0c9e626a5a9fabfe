use super::*;

fn discord(guild_ids: &[&str]) -> DiscordProfile {
    DiscordProfile {
        discord_id: "777".to_string(),
        username: "witchfan".to_string(),
        guild_ids: guild_ids.iter().map(|g| g.to_string()).collect(),
    }
}

/// Tests linking a Discord account that is in the XYLO server.
///
/// Expected: Verified account and the user's referral flagged as Discord joined
#[tokio::test]
async fn flags_referral_when_in_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config {
        discord_server_id: Some("42".to_string()),
        ..Default::default()
    };
    let referrer = factory::create_user(db).await?;
    let referee = factory::create_user(db).await?;
    factory::create_referral(db, referrer.id, referee.id).await?;

    let result = AuthService::new(db, &config)
        .link_discord(referee.id, &discord(&["1", "42"]))
        .await?;

    assert!(result.is_in_server);
    assert_eq!(result.message, "Discord server verified!");

    let referral = ReferralRepository::new(db)
        .find_by_referee(referee.id)
        .await?
        .unwrap();
    assert!(referral.is_discord_joined);

    Ok(())
}

/// Tests linking a Discord account outside the server.
///
/// Expected: Unverified account, referral untouched
#[tokio::test]
async fn not_in_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config {
        discord_server_id: Some("42".to_string()),
        ..Default::default()
    };
    let referrer = factory::create_user(db).await?;
    let referee = factory::create_user(db).await?;
    factory::create_referral(db, referrer.id, referee.id).await?;

    let result = AuthService::new(db, &config)
        .link_discord(referee.id, &discord(&["1"]))
        .await?;

    assert!(!result.is_in_server);

    let accounts = SocialAccountRepository::new(db).get_by_user(referee.id).await?;
    assert!(!accounts[0].is_verified);
    let referral = ReferralRepository::new(db)
        .find_by_referee(referee.id)
        .await?
        .unwrap();
    assert!(!referral.is_discord_joined);

    Ok(())
}
