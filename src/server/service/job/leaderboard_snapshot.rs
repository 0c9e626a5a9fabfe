//! Leaderboard snapshot job: ranks verified channels for every period.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        leaderboard::{LeaderboardRepository, NewLeaderboardEntry},
        point::PointRepository,
        user::UserRepository,
        youtube_channel::YoutubeChannelRepository,
    },
    error::AppError,
    model::leaderboard::LeaderboardPeriod,
    util::time::kst_today,
};

/// Writes the daily leaderboard snapshot for every period.
pub struct LeaderboardSnapshotService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LeaderboardSnapshotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Snapshots today's ranking for all five periods.
    ///
    /// # Returns
    /// - `Ok(usize)` - Rows written per period
    pub async fn run(&self) -> Result<usize, AppError> {
        self.run_for(kst_today()).await
    }

    /// Ranks verified channels by subscriber count and stores one row per
    /// channel whose owner has a point summary. The rank is the channel's
    /// position in that order, so skipped channels leave gaps.
    pub async fn run_for(&self, snapshot_date: NaiveDate) -> Result<usize, AppError> {
        let channels = YoutubeChannelRepository::new(self.db)
            .get_verified_by_subscribers()
            .await?;

        let user_ids: Vec<i32> = channels.iter().map(|c| c.user_id).collect();
        let summaries: HashMap<i32, entity::user_points::Model> = PointRepository::new(self.db)
            .get_summaries_for(user_ids.clone())
            .await?
            .into_iter()
            .map(|s| (s.user_id, s))
            .collect();
        let users: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let entries: Vec<NewLeaderboardEntry> = channels
            .iter()
            .enumerate()
            .filter_map(|(index, channel)| {
                let points = summaries.get(&channel.user_id)?.clone();
                let user = users.get(&channel.user_id);

                Some(NewLeaderboardEntry {
                    user_id: channel.user_id,
                    channel_id: channel.id,
                    rank: index as i32 + 1,
                    points,
                    channel_title: channel.channel_title.clone(),
                    channel_image_url: channel.thumbnail_url.clone(),
                    x_handle: user.map(|u| u.x_handle.clone()),
                    profile_image_url: user
                        .and_then(|u| u.profile_image_url.clone())
                        .or_else(|| channel.thumbnail_url.clone()),
                })
            })
            .collect();

        let repo = LeaderboardRepository::new(self.db);
        for period in LeaderboardPeriod::ALL_PERIODS {
            for entry in &entries {
                let (user_id, rank) = (entry.user_id, entry.rank);
                if let Err(e) = repo.upsert(period, snapshot_date, entry.clone()).await {
                    tracing::error!(
                        "Failed to store {} leaderboard rank {} for user {}: {}",
                        period.as_api(),
                        rank,
                        user_id,
                        e
                    );
                }
            }
            tracing::info!(
                "Created {} leaderboard entries for period {}",
                entries.len(),
                period.as_db()
            );
        }

        Ok(entries.len())
    }
}
