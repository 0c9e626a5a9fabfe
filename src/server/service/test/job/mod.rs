use chrono::Duration;

use crate::server::{
    data::{
        leaderboard::LeaderboardRepository, point::PointRepository, snapshot::SnapshotRepository,
        youtube_channel::YoutubeChannelRepository, youtube_video::YoutubeVideoRepository,
    },
    error::AppError,
    model::leaderboard::LeaderboardPeriod,
    service::{
        job::{
            content_points::ContentPointService, crawl::CrawlService,
            leaderboard_snapshot::LeaderboardSnapshotService,
        },
        test::stub::StubYoutube,
    },
    util::time::kst_today,
    youtube::api::VideoDetails,
};
use test_utils::{builder::TestBuilder, factory};

mod crawl;
mod leaderboard_snapshot;

const CHANNEL_ID: &str = "UCabcdefghijklmnopqrstuv";
