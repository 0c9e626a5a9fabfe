use chrono::NaiveDate;
use crate::server::{data::snapshot::SnapshotRepository, model::youtube::Engagement};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert_video;
