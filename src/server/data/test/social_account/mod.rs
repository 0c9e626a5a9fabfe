use crate::server::{
    data::social_account::SocialAccountRepository,
    model::user::{Platform, UpsertSocialAccountParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod has_verified;

fn discord_param(user_id: i32, is_verified: bool) -> UpsertSocialAccountParam {
    UpsertSocialAccountParam {
        user_id,
        platform: Platform::Discord,
        account_id: "discord-1".to_string(),
        handle: Some("witch".to_string()),
        display_name: Some("witch".to_string()),
        profile_image: None,
        is_verified,
    }
}
