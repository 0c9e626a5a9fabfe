use crate::server::data::referral::{ReferralProgress, ReferralRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_incomplete;
mod mark_discord_joined;
