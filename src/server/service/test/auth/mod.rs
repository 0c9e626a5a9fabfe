use chrono::{Duration, Utc};
use crate::server::{
    config::Config,
    data::{
        email_code::RequestMeta, point::PointRepository, referral::ReferralRepository,
        social_account::SocialAccountRepository,
    },
    error::AppError,
    model::user::{DiscordProfile, XProfile},
    service::{auth::AuthService, email::LogCodeSender},
};
use test_utils::{builder::TestBuilder, factory};

mod email_recovery;
mod link_discord;
mod login_or_register;

fn x_profile(x_id: &str, handle: &str) -> XProfile {
    XProfile {
        x_id: x_id.to_string(),
        handle: handle.to_string(),
        display_name: format!("{} display", handle),
        profile_image_url: None,
    }
}
