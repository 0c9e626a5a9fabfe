use chrono::{Duration, Utc};
use crate::server::data::youtube_video::YoutubeVideoRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_scorable_by_channel;
mod has_eligible_since;
