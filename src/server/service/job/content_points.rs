//! Content point job: awards engagement growth between daily video snapshots.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::{
        snapshot::SnapshotRepository, youtube_channel::YoutubeChannelRepository,
        youtube_video::YoutubeVideoRepository,
    },
    error::AppError,
    model::{
        point::{AwardPointsParam, PointCategory},
        youtube::Engagement,
    },
    service::point::PointService,
    util::time::kst_today,
};

/// Outcome of a point calculation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentPointsSummary {
    pub channels: usize,
    pub awards: usize,
    pub points: i64,
}

/// Awards CONTENT points for engagement growth since yesterday's snapshot.
pub struct ContentPointService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ContentPointService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Scores every eligible, public and processed video on a verified channel.
    ///
    /// Videos without both today's and yesterday's snapshot are skipped.
    pub async fn run(&self) -> Result<ContentPointsSummary, AppError> {
        let channels = YoutubeChannelRepository::new(self.db)
            .get_verified(None)
            .await?;

        tracing::info!("Calculating content points for {} channel(s)", channels.len());

        let mut summary = ContentPointsSummary::default();
        for channel in channels {
            match self.score_channel(&channel).await {
                Ok((awards, points)) => {
                    summary.channels += 1;
                    summary.awards += awards;
                    summary.points += points;
                    if points > 0 {
                        tracing::info!(
                            "Awarded {} CONTENT points to user {} for channel {}",
                            points,
                            channel.user_id,
                            channel.id
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to calculate points for channel {}: {}", channel.id, e)
                }
            }
        }

        Ok(summary)
    }

    async fn score_channel(
        &self,
        channel: &entity::youtube_channel::Model,
    ) -> Result<(usize, i64), AppError> {
        let today = kst_today();
        let yesterday = today - Duration::days(1);
        let snapshots = SnapshotRepository::new(self.db);
        let points = PointService::new(self.db);

        let videos = YoutubeVideoRepository::new(self.db)
            .get_scorable_by_channel(channel.id)
            .await?;

        let mut awards = 0;
        let mut total = 0;
        for video in videos {
            let (Some(current), Some(previous)) = (
                snapshots.find_video(video.id, today).await?,
                snapshots.find_video(video.id, yesterday).await?,
            ) else {
                continue;
            };

            let delta = Engagement::from(&current).delta_since(&Engagement::from(&previous));
            let amount = delta.points();
            if amount <= 0 {
                continue;
            }

            let reason = format!(
                "Video {}: +{} views, +{} likes, +{} comments",
                video.video_id, delta.views, delta.likes, delta.comments
            );
            let param = AwardPointsParam::new(channel.user_id, PointCategory::Content, amount, reason)
                .with_metadata(json!({
                    "videoId": video.id,
                    "videoYtId": video.video_id,
                    "viewDelta": delta.views,
                    "likeDelta": delta.likes,
                    "commentDelta": delta.comments,
                    "viewPoints": delta.views,
                    "likePoints": delta.likes,
                    "commentPoints": delta.comment_points(),
                }));

            points.add_points(param).await?;
            awards += 1;
            total += amount;
        }

        Ok((awards, total))
    }
}
