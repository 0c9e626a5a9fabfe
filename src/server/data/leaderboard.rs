//! Leaderboard snapshot repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::leaderboard::{LeaderboardCategory, LeaderboardPeriod, SortOrder};

/// Values for one snapshot row before it is stored.
#[derive(Debug, Clone)]
pub struct NewLeaderboardEntry {
    pub user_id: i32,
    pub channel_id: i32,
    pub rank: i32,
    pub points: entity::user_points::Model,
    pub channel_title: String,
    pub channel_image_url: Option<String>,
    pub x_handle: Option<String>,
    pub profile_image_url: Option<String>,
}

pub struct LeaderboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a ranked row, replacing whatever held that rank on `snapshot_date`.
    pub async fn upsert(
        &self,
        period: LeaderboardPeriod,
        snapshot_date: NaiveDate,
        entry: NewLeaderboardEntry,
    ) -> Result<entity::leaderboard_entry::Model, DbErr> {
        use entity::leaderboard_entry::Column;

        entity::prelude::LeaderboardEntry::insert(entity::leaderboard_entry::ActiveModel {
            user_id: ActiveValue::Set(entry.user_id),
            channel_id: ActiveValue::Set(entry.channel_id),
            period: ActiveValue::Set(period.as_db().to_string()),
            rank: ActiveValue::Set(entry.rank),
            total_current: ActiveValue::Set(entry.points.total_points),
            contents: ActiveValue::Set(entry.points.slot_01_content),
            mgm: ActiveValue::Set(entry.points.slot_02_mgm),
            event: ActiveValue::Set(entry.points.slot_03_event),
            profit: ActiveValue::Set(entry.points.slot_04_profit),
            sponsor: ActiveValue::Set(entry.points.slot_05_sponsor),
            boost: ActiveValue::Set(entry.points.slot_06_boost),
            channel_title: ActiveValue::Set(entry.channel_title),
            channel_image_url: ActiveValue::Set(entry.channel_image_url),
            x_handle: ActiveValue::Set(entry.x_handle),
            profile_image_url: ActiveValue::Set(entry.profile_image_url),
            snapshot_date: ActiveValue::Set(snapshot_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::Period, Column::Rank, Column::SnapshotDate])
                .update_columns([
                    Column::UserId,
                    Column::ChannelId,
                    Column::TotalCurrent,
                    Column::Contents,
                    Column::Mgm,
                    Column::Event,
                    Column::Profit,
                    Column::Sponsor,
                    Column::Boost,
                    Column::ChannelTitle,
                    Column::ChannelImageUrl,
                    Column::XHandle,
                    Column::ProfileImageUrl,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Most recent snapshot date for a period.
    pub async fn latest_snapshot_date(
        &self,
        period: LeaderboardPeriod,
    ) -> Result<Option<NaiveDate>, DbErr> {
        let latest = entity::prelude::LeaderboardEntry::find()
            .filter(entity::leaderboard_entry::Column::Period.eq(period.as_db()))
            .order_by_desc(entity::leaderboard_entry::Column::SnapshotDate)
            .one(self.db)
            .await?;

        Ok(latest.map(|entry| entry.snapshot_date))
    }

    /// A page of one snapshot ordered by `category`, with the snapshot's row count.
    pub async fn get_page(
        &self,
        period: LeaderboardPeriod,
        snapshot_date: NaiveDate,
        category: LeaderboardCategory,
        sort: SortOrder,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<entity::leaderboard_entry::Model>, u64), DbErr> {
        use entity::leaderboard_entry::Column;

        let base = entity::prelude::LeaderboardEntry::find()
            .filter(Column::Period.eq(period.as_db()))
            .filter(Column::SnapshotDate.eq(snapshot_date));

        let total = base.clone().count(self.db).await?;

        let ordered = match sort {
            SortOrder::Desc => base.order_by_desc(category.column()),
            SortOrder::Asc => base.order_by_asc(category.column()),
        };
        let entries = ordered
            .order_by_asc(Column::Rank)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        Ok((entries, total))
    }

    /// Every row of one snapshot, by rank.
    pub async fn get_snapshot(
        &self,
        period: LeaderboardPeriod,
        snapshot_date: NaiveDate,
    ) -> Result<Vec<entity::leaderboard_entry::Model>, DbErr> {
        entity::prelude::LeaderboardEntry::find()
            .filter(entity::leaderboard_entry::Column::Period.eq(period.as_db()))
            .filter(entity::leaderboard_entry::Column::SnapshotDate.eq(snapshot_date))
            .order_by_asc(entity::leaderboard_entry::Column::Rank)
            .all(self.db)
            .await
    }

    /// A user's rows in one snapshot, best rank first.
    pub async fn get_user_entries(
        &self,
        user_id: i32,
        period: LeaderboardPeriod,
        snapshot_date: NaiveDate,
    ) -> Result<Vec<entity::leaderboard_entry::Model>, DbErr> {
        entity::prelude::LeaderboardEntry::find()
            .filter(entity::leaderboard_entry::Column::UserId.eq(user_id))
            .filter(entity::leaderboard_entry::Column::Period.eq(period.as_db()))
            .filter(entity::leaderboard_entry::Column::SnapshotDate.eq(snapshot_date))
            .order_by_asc(entity::leaderboard_entry::Column::Rank)
            .all(self.db)
            .await
    }
}
