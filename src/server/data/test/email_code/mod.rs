use chrono::{Duration, Utc};
use crate::server::data::email_code::{EmailCodeRepository, RequestMeta};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_valid;
mod increment_attempts;
mod mark_recovered;
