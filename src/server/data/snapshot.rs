//! Daily video and channel snapshot repository.
//!
//! Snapshots are keyed by KST calendar date and upserted so a crawl can be
//! rerun on the same day.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::youtube::Engagement;

pub struct SnapshotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SnapshotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a video's counts for `date`, replacing any earlier snapshot that day.
    pub async fn upsert_video(
        &self,
        video_id: i32,
        date: NaiveDate,
        counts: Engagement,
    ) -> Result<entity::video_snapshot::Model, DbErr> {
        use entity::video_snapshot::Column;

        entity::prelude::VideoSnapshot::insert(entity::video_snapshot::ActiveModel {
            video_id: ActiveValue::Set(video_id),
            snapshot_date: ActiveValue::Set(date),
            view_count: ActiveValue::Set(counts.views),
            like_count: ActiveValue::Set(counts.likes),
            comment_count: ActiveValue::Set(counts.comments),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::VideoId, Column::SnapshotDate])
                .update_columns([Column::ViewCount, Column::LikeCount, Column::CommentCount])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_video(
        &self,
        video_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::video_snapshot::Model>, DbErr> {
        entity::prelude::VideoSnapshot::find()
            .filter(entity::video_snapshot::Column::VideoId.eq(video_id))
            .filter(entity::video_snapshot::Column::SnapshotDate.eq(date))
            .one(self.db)
            .await
    }

    /// Records a channel's statistics for `date`, replacing any earlier snapshot that day.
    pub async fn upsert_channel(
        &self,
        channel: &entity::youtube_channel::Model,
        date: NaiveDate,
    ) -> Result<entity::channel_daily_snapshot::Model, DbErr> {
        use entity::channel_daily_snapshot::Column;

        entity::prelude::ChannelDailySnapshot::insert(entity::channel_daily_snapshot::ActiveModel {
            channel_id: ActiveValue::Set(channel.id),
            snapshot_date: ActiveValue::Set(date),
            subscriber_count: ActiveValue::Set(channel.subscriber_count),
            video_count: ActiveValue::Set(channel.video_count),
            view_count: ActiveValue::Set(channel.view_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::ChannelId, Column::SnapshotDate])
                .update_columns([Column::SubscriberCount, Column::VideoCount, Column::ViewCount])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_channel(
        &self,
        channel_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::channel_daily_snapshot::Model>, DbErr> {
        entity::prelude::ChannelDailySnapshot::find()
            .filter(entity::channel_daily_snapshot::Column::ChannelId.eq(channel_id))
            .filter(entity::channel_daily_snapshot::Column::SnapshotDate.eq(date))
            .one(self.db)
            .await
    }
}
