use sea_orm::DatabaseConnection;

use crate::{
    model::leaderboard::{
        EntryChannelDto, EntryPointsDto, LeaderboardEntryDto, LeaderboardPageDto,
        LeaderboardQuery, LeaderboardStatsDto, Top3Dto, UserChannelRankDto, UserRankDto,
    },
    server::{
        data::{leaderboard::LeaderboardRepository, youtube_channel::YoutubeChannelRepository},
        error::AppError,
        model::leaderboard::{LeaderboardCategory, LeaderboardPeriod, SortOrder},
        util::page::{clamp_offset, page_offset},
    },
};

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;
const TOP_COUNT: usize = 3;

/// Reads the newest leaderboard snapshot of a period.
pub struct LeaderboardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// A page of the latest snapshot.
    ///
    /// An explicit `offset` takes precedence over `page`. When the period has no
    /// snapshot yet the page is empty and `snapshotDate` is `null`.
    ///
    /// # Returns
    /// - `Ok(LeaderboardPageDto)` - Page metadata and entries
    /// - `Err(AppError::BadRequest)` - Unknown period, category or sort, or a limit outside 1..=100
    pub async fn get_leaderboard(
        &self,
        query: LeaderboardQuery,
    ) -> Result<LeaderboardPageDto, AppError> {
        let period = LeaderboardPeriod::from_api(query.period.as_deref())?;
        let category = LeaderboardCategory::from_api(query.category.as_deref())?;
        let sort = SortOrder::from_api(query.sort.as_deref())?;

        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        let page = query.page.unwrap_or(1);
        if page < 1 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }
        let offset = query
            .offset
            .map(clamp_offset)
            .unwrap_or_else(|| page_offset(page, limit));

        let repo = LeaderboardRepository::new(self.db);
        let snapshot_date = repo.latest_snapshot_date(period).await?;

        let (entries, total) = match snapshot_date {
            Some(date) => {
                repo.get_page(period, date, category, sort, limit, offset)
                    .await?
            }
            None => (Vec::new(), 0),
        };

        Ok(LeaderboardPageDto {
            period: period.as_api().to_string(),
            category: category.as_api().to_string(),
            sort: sort.as_api().to_string(),
            snapshot_date,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
            entries: entries.into_iter().map(LeaderboardEntryDto::from).collect(),
        })
    }

    /// The user's best-ranked channel in the latest snapshot, with all their ranked channels.
    ///
    /// # Returns
    /// - `Ok(Some(UserRankDto))` - The user is ranked
    /// - `Ok(None)` - No snapshot, or the user has no row in it
    pub async fn get_user_rank(
        &self,
        user_id: i32,
        period: Option<&str>,
    ) -> Result<Option<UserRankDto>, AppError> {
        let period = LeaderboardPeriod::from_api(period)?;
        let repo = LeaderboardRepository::new(self.db);

        let Some(snapshot_date) = repo.latest_snapshot_date(period).await? else {
            return Ok(None);
        };

        let entries = repo
            .get_user_entries(user_id, period, snapshot_date)
            .await?;
        let Some(best) = entries.first() else {
            return Ok(None);
        };

        Ok(Some(UserRankDto {
            period: period.as_api().to_string(),
            snapshot_date,
            rank: best.rank,
            channel_id: best.channel_id,
            total_points: best.total_current,
            points: EntryPointsDto::from(best),
            channel: EntryChannelDto {
                title: best.channel_title.clone(),
                image_url: best.channel_image_url.clone(),
                url: None,
            },
            all_channels: entries
                .iter()
                .map(|entry| UserChannelRankDto {
                    channel_id: entry.channel_id,
                    rank: entry.rank,
                    channel_title: entry.channel_title.clone(),
                })
                .collect(),
        }))
    }

    /// The three best ranks of the latest snapshot, with channel links.
    pub async fn get_top3(&self, period: Option<&str>) -> Result<Top3Dto, AppError> {
        let period = LeaderboardPeriod::from_api(period)?;
        let repo = LeaderboardRepository::new(self.db);

        let Some(snapshot_date) = repo.latest_snapshot_date(period).await? else {
            return Ok(Top3Dto {
                period: period.as_api().to_string(),
                snapshot_date: None,
                top3: Vec::new(),
            });
        };

        let channels = YoutubeChannelRepository::new(self.db);
        let mut top3 = Vec::with_capacity(TOP_COUNT);
        for entry in repo
            .get_snapshot(period, snapshot_date)
            .await?
            .into_iter()
            .take(TOP_COUNT)
        {
            let youtube_id = channels
                .find_by_id(entry.channel_id)
                .await?
                .map(|c| c.channel_id);

            let mut dto = LeaderboardEntryDto::from(entry);
            dto.channel.url =
                youtube_id.map(|id| format!("https://www.youtube.com/channel/{}", id));
            top3.push(dto);
        }

        Ok(Top3Dto {
            period: period.as_api().to_string(),
            snapshot_date: Some(snapshot_date),
            top3,
        })
    }

    /// Aggregates over `total_current` in the latest snapshot.
    ///
    /// # Returns
    /// - `Ok(Some(LeaderboardStatsDto))` - Count, rounded average, sum, max and min
    /// - `Ok(None)` - No snapshot for the period
    pub async fn get_stats(
        &self,
        period: Option<&str>,
    ) -> Result<Option<LeaderboardStatsDto>, AppError> {
        let period = LeaderboardPeriod::from_api(period)?;
        let repo = LeaderboardRepository::new(self.db);

        let Some(snapshot_date) = repo.latest_snapshot_date(period).await? else {
            return Ok(None);
        };

        let totals: Vec<i64> = repo
            .get_snapshot(period, snapshot_date)
            .await?
            .iter()
            .map(|entry| entry.total_current)
            .collect();

        let count = totals.len();
        let sum: i64 = totals.iter().sum();
        let average = if count == 0 {
            0
        } else {
            (sum as f64 / count as f64).round() as i64
        };

        Ok(Some(LeaderboardStatsDto {
            period: period.as_api().to_string(),
            snapshot_date,
            total_entries: count as u64,
            average_points: average,
            total_points: sum,
            max_points: totals.iter().copied().max().unwrap_or(0),
            min_points: totals.iter().copied().min().unwrap_or(0),
        }))
    }
}
