use crate::server::{
    data::user::UserRepository,
    model::user::{UpdateUserParam, XProfile},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_referral_code;
mod update_profile;
