//! YouTube channel repository.
//!
//! Handles registration rows, verification state and the statistics refreshed
//! by the crawl job. Verification history rows are written through
//! `ChannelVerificationHistoryRepository`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::server::{
    model::youtube::{channel_url, VerificationAction},
    youtube::api::ChannelInfo,
};

pub struct YoutubeChannelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YoutubeChannelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unverified channel row from fetched channel info.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the registration
    /// - `info` - Channel details from the YouTube API
    /// - `verification_code` - Code the owner must place in the channel description
    ///
    /// # Returns
    /// - `Ok(Model)` - The created channel
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        info: &ChannelInfo,
        verification_code: &str,
    ) -> Result<entity::youtube_channel::Model, DbErr> {
        let now = Utc::now();

        entity::youtube_channel::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            channel_id: ActiveValue::Set(info.channel_id.clone()),
            channel_url: ActiveValue::Set(channel_url(
                &info.channel_id,
                info.custom_url.as_deref(),
            )),
            channel_title: ActiveValue::Set(info.title.clone()),
            thumbnail_url: ActiveValue::Set(info.thumbnail_url.clone()),
            subscriber_count: ActiveValue::Set(info.subscriber_count),
            video_count: ActiveValue::Set(info.video_count),
            view_count: ActiveValue::Set(info.view_count),
            verification_code: ActiveValue::Set(verification_code.to_string()),
            is_verified: ActiveValue::Set(false),
            verified_at: ActiveValue::Set(None),
            verification_attempts: ActiveValue::Set(0),
            first_registered_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::youtube_channel::Model>, DbErr> {
        entity::prelude::YoutubeChannel::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds a channel row only when it belongs to `user_id`.
    pub async fn find_owned(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::youtube_channel::Model>, DbErr> {
        entity::prelude::YoutubeChannel::find_by_id(id)
            .filter(entity::youtube_channel::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Any verified row for a YouTube channel id.
    pub async fn find_verified_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Option<entity::youtube_channel::Model>, DbErr> {
        entity::prelude::YoutubeChannel::find()
            .filter(entity::youtube_channel::Column::ChannelId.eq(channel_id))
            .filter(entity::youtube_channel::Column::IsVerified.eq(true))
            .one(self.db)
            .await
    }

    /// An unverified registration for a YouTube channel id, excluding `except_id`.
    pub async fn find_pending_by_channel_id(
        &self,
        channel_id: &str,
        except_id: Option<i32>,
    ) -> Result<Option<entity::youtube_channel::Model>, DbErr> {
        let mut query = entity::prelude::YoutubeChannel::find()
            .filter(entity::youtube_channel::Column::ChannelId.eq(channel_id))
            .filter(entity::youtube_channel::Column::IsVerified.eq(false));
        if let Some(id) = except_id {
            query = query.filter(entity::youtube_channel::Column::Id.ne(id));
        }

        query
            .order_by_asc(entity::youtube_channel::Column::FirstRegisteredAt)
            .one(self.db)
            .await
    }

    /// Channels of a user, newest registration first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::youtube_channel::Model>, DbErr> {
        entity::prelude::YoutubeChannel::find()
            .filter(entity::youtube_channel::Column::UserId.eq(user_id))
            .order_by_desc(entity::youtube_channel::Column::CreatedAt)
            .order_by_desc(entity::youtube_channel::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_verified_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::youtube_channel::Model>, DbErr> {
        entity::prelude::YoutubeChannel::find()
            .filter(entity::youtube_channel::Column::UserId.eq(user_id))
            .filter(entity::youtube_channel::Column::IsVerified.eq(true))
            .all(self.db)
            .await
    }

    /// Verified channels, optionally narrowed to one YouTube channel id.
    pub async fn get_verified(
        &self,
        channel_id: Option<&str>,
    ) -> Result<Vec<entity::youtube_channel::Model>, DbErr> {
        let mut query = entity::prelude::YoutubeChannel::find()
            .filter(entity::youtube_channel::Column::IsVerified.eq(true));
        if let Some(channel_id) = channel_id {
            query = query.filter(entity::youtube_channel::Column::ChannelId.eq(channel_id));
        }

        query
            .order_by_asc(entity::youtube_channel::Column::Id)
            .all(self.db)
            .await
    }

    /// Verified channels ordered by subscriber count, largest first.
    pub async fn get_verified_by_subscribers(
        &self,
    ) -> Result<Vec<entity::youtube_channel::Model>, DbErr> {
        entity::prelude::YoutubeChannel::find()
            .filter(entity::youtube_channel::Column::IsVerified.eq(true))
            .order_by_desc(entity::youtube_channel::Column::SubscriberCount)
            .order_by_asc(entity::youtube_channel::Column::Id)
            .all(self.db)
            .await
    }

    /// Records one more verification attempt and returns the new count.
    pub async fn increment_attempts(
        &self,
        channel: entity::youtube_channel::Model,
    ) -> Result<entity::youtube_channel::Model, DbErr> {
        let attempts = channel.verification_attempts + 1;
        let mut active = channel.into_active_model();
        active.verification_attempts = ActiveValue::Set(attempts);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Flips the channel to verified, counting the successful attempt.
    pub async fn mark_verified(
        &self,
        channel: entity::youtube_channel::Model,
        verified_at: DateTime<Utc>,
    ) -> Result<entity::youtube_channel::Model, DbErr> {
        let attempts = channel.verification_attempts + 1;
        let mut active = channel.into_active_model();
        active.is_verified = ActiveValue::Set(true);
        active.verified_at = ActiveValue::Set(Some(verified_at));
        active.verification_attempts = ActiveValue::Set(attempts);
        active.updated_at = ActiveValue::Set(verified_at);

        active.update(self.db).await
    }

    /// Stores refreshed title, thumbnail and statistics.
    pub async fn update_statistics(
        &self,
        channel: entity::youtube_channel::Model,
        info: &ChannelInfo,
    ) -> Result<entity::youtube_channel::Model, DbErr> {
        let mut active = channel.into_active_model();
        active.channel_title = ActiveValue::Set(info.title.clone());
        if info.thumbnail_url.is_some() {
            active.thumbnail_url = ActiveValue::Set(info.thumbnail_url.clone());
        }
        active.subscriber_count = ActiveValue::Set(info.subscriber_count);
        active.video_count = ActiveValue::Set(info.video_count);
        active.view_count = ActiveValue::Set(info.view_count);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes a channel row. Videos and snapshots cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::YoutubeChannel::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}

/// Append-only log of verification attempts.
pub struct ChannelVerificationHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChannelVerificationHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        channel: &entity::youtube_channel::Model,
        action: VerificationAction,
        metadata: Value,
    ) -> Result<entity::channel_verification_history::Model, DbErr> {
        entity::channel_verification_history::ActiveModel {
            channel_id: ActiveValue::Set(channel.channel_id.clone()),
            user_id: ActiveValue::Set(channel.user_id),
            verification_code: ActiveValue::Set(channel.verification_code.clone()),
            action_type: ActiveValue::Set(action.as_str().to_string()),
            metadata: ActiveValue::Set(Some(metadata)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// History of a YouTube channel id, oldest first.
    pub async fn get_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Vec<entity::channel_verification_history::Model>, DbErr> {
        entity::prelude::ChannelVerificationHistory::find()
            .filter(entity::channel_verification_history::Column::ChannelId.eq(channel_id))
            .order_by_asc(entity::channel_verification_history::Column::Id)
            .all(self.db)
            .await
    }
}
