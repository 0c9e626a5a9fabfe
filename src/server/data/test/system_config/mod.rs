use crate::server::data::system_config::SystemConfigRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::builder::TestBuilder;

mod get_string_list;
