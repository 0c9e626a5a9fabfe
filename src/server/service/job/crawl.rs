//! YouTube crawl job: refreshes verified channels and their recent uploads.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        snapshot::SnapshotRepository, system_config::SystemConfigRepository,
        youtube_channel::YoutubeChannelRepository, youtube_video::YoutubeVideoRepository,
    },
    error::AppError,
    model::youtube::{
        Engagement, CRAWL_LOOKBACK_DAYS, CRAWL_MAX_RESULTS, DEFAULT_REQUIRED_TAGS,
        REQUIRED_TAGS_KEY, SHORTS_MAX_SECONDS,
    },
    util::time::kst_today,
    youtube::{api::YoutubeApi, parse::is_eligible},
};

/// Outcome of a crawl run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub channels: usize,
    pub videos: usize,
    pub failed: usize,
}

/// Refreshes verified channels and their recent uploads from YouTube.
pub struct CrawlService<'a, Y: YoutubeApi> {
    pub db: &'a DatabaseConnection,
    pub youtube: &'a Y,
}

impl<'a, Y: YoutubeApi> CrawlService<'a, Y> {
    pub fn new(db: &'a DatabaseConnection, youtube: &'a Y) -> Self {
        Self { db, youtube }
    }

    /// Crawls every verified channel, or only the one with YouTube id `channel_id`.
    ///
    /// Does nothing when the YouTube client has no API key.
    ///
    /// # Returns
    /// - `Ok(CrawlSummary)` - Channels crawled, videos stored and channels that failed
    /// - `Err(AppError::DbErr)` - The channel list or tag configuration could not be read
    pub async fn run(&self, channel_id: Option<&str>) -> Result<CrawlSummary, AppError> {
        if !self.youtube.is_enabled() {
            tracing::warn!("YouTube API key is not configured, skipping crawl");
            return Ok(CrawlSummary::default());
        }

        let required_tags = self.required_tags().await?;
        let channels = YoutubeChannelRepository::new(self.db)
            .get_verified(channel_id)
            .await?;

        tracing::info!("Crawling {} verified channel(s)", channels.len());

        let mut summary = CrawlSummary::default();
        for channel in channels {
            let id = channel.id;
            match self.crawl_channel(channel, &required_tags).await {
                Ok(videos) => {
                    summary.channels += 1;
                    summary.videos += videos;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!("Failed to crawl channel {}: {}", id, e);
                }
            }
        }

        tracing::info!(
            "YouTube crawl finished: {} channel(s), {} video(s), {} failed",
            summary.channels,
            summary.videos,
            summary.failed
        );

        Ok(summary)
    }

    /// Refreshes one channel and stores today's snapshots. Returns the number of videos stored.
    async fn crawl_channel(
        &self,
        channel: entity::youtube_channel::Model,
        required_tags: &[String],
    ) -> Result<usize, AppError> {
        let today = kst_today();
        let channel_repo = YoutubeChannelRepository::new(self.db);
        let video_repo = YoutubeVideoRepository::new(self.db);
        let snapshots = SnapshotRepository::new(self.db);

        let info = self.youtube.fetch_channel(&channel.channel_id).await?;
        let channel = channel_repo.update_statistics(channel, &info).await?;

        let since = Utc::now() - Duration::days(CRAWL_LOOKBACK_DAYS);
        let video_ids = self
            .youtube
            .search_recent_video_ids(&channel.channel_id, since, CRAWL_MAX_RESULTS)
            .await?;

        let videos = if video_ids.is_empty() {
            Vec::new()
        } else {
            self.youtube.fetch_videos(&video_ids).await?
        };

        for details in &videos {
            let is_shorts = details.duration_seconds <= SHORTS_MAX_SECONDS;
            let eligible = is_eligible(&details.tags, required_tags);

            let video = video_repo
                .upsert(channel.id, details, is_shorts, eligible)
                .await?;
            snapshots
                .upsert_video(video.id, today, Engagement::from(&video))
                .await?;
        }

        snapshots.upsert_channel(&channel, today).await?;

        tracing::debug!(
            "Crawled channel {} ({}): {} video(s)",
            channel.id,
            channel.channel_id,
            videos.len()
        );

        Ok(videos.len())
    }

    async fn required_tags(&self) -> Result<Vec<String>, AppError> {
        let configured = SystemConfigRepository::new(self.db)
            .get_string_list(REQUIRED_TAGS_KEY)
            .await?;

        Ok(configured.unwrap_or_else(|| {
            DEFAULT_REQUIRED_TAGS
                .iter()
                .map(|tag| tag.to_string())
                .collect()
        }))
    }
}
