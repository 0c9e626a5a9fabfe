use crate::{
    model::user::UpdateProfileDto,
    server::{error::AppError, service::user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod get_activity_stats;
mod get_social_accounts;

const WALLET: &str = "0x1111111111111111111111111111111111111111";
