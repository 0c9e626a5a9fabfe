use chrono::Utc;
use crate::server::{data::nft::NftRepository, model::nft::NftType};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod burn;
mod find_active;
