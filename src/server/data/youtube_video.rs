//! YouTube video repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::json;

use crate::server::youtube::api::VideoDetails;

pub struct YoutubeVideoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YoutubeVideoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a crawled video or refreshes its mutable fields.
    ///
    /// On conflict with an existing `video_id` the statistics, tags, status,
    /// thumbnails, title and description are updated. The owning channel and
    /// publish time are kept.
    ///
    /// # Arguments
    /// - `channel_id` - Database id of the owning channel
    /// - `video` - Details from videos.list
    /// - `is_shorts` - Duration is at most 60 seconds
    /// - `is_eligible` - Tags contain a required hashtag
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored video
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        channel_id: i32,
        video: &VideoDetails,
        is_shorts: bool,
        is_eligible: bool,
    ) -> Result<entity::youtube_video::Model, DbErr> {
        use entity::youtube_video::Column;

        let now = Utc::now();

        entity::prelude::YoutubeVideo::insert(entity::youtube_video::ActiveModel {
            channel_id: ActiveValue::Set(channel_id),
            video_id: ActiveValue::Set(video.video_id.clone()),
            title: ActiveValue::Set(video.title.clone()),
            description: ActiveValue::Set(video.description.clone()),
            thumbnail_url: ActiveValue::Set(video.thumbnails.default.clone().unwrap_or_default()),
            thumbnail_medium_url: ActiveValue::Set(video.thumbnails.medium.clone()),
            thumbnail_high_url: ActiveValue::Set(video.thumbnails.high.clone()),
            thumbnail_standard_url: ActiveValue::Set(video.thumbnails.standard.clone()),
            thumbnail_maxres_url: ActiveValue::Set(video.thumbnails.maxres.clone()),
            published_at: ActiveValue::Set(video.published_at.unwrap_or(now)),
            category_id: ActiveValue::Set(video.category_id.clone()),
            default_language: ActiveValue::Set(video.default_language.clone()),
            default_audio_language: ActiveValue::Set(video.default_audio_language.clone()),
            channel_title: ActiveValue::Set(video.channel_title.clone()),
            live_broadcast_content: ActiveValue::Set(video.live_broadcast_content.clone()),
            duration: ActiveValue::Set(video.duration_seconds),
            definition: ActiveValue::Set(video.definition.clone()),
            dimension: ActiveValue::Set(video.dimension.clone()),
            has_caption: ActiveValue::Set(video.has_caption),
            is_licensed_content: ActiveValue::Set(video.is_licensed_content),
            projection: ActiveValue::Set(video.projection.clone()),
            view_count: ActiveValue::Set(video.view_count),
            like_count: ActiveValue::Set(video.like_count),
            comment_count: ActiveValue::Set(video.comment_count),
            privacy_status: ActiveValue::Set(video.privacy_status.clone()),
            upload_status: ActiveValue::Set(video.upload_status.clone()),
            is_embeddable: ActiveValue::Set(video.is_embeddable),
            license: ActiveValue::Set(video.license.clone()),
            is_made_for_kids: ActiveValue::Set(video.is_made_for_kids),
            is_public_stats_viewable: ActiveValue::Set(video.is_public_stats_viewable),
            tags: ActiveValue::Set(json!(video.tags)),
            is_shorts: ActiveValue::Set(is_shorts),
            is_eligible: ActiveValue::Set(is_eligible),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(Column::VideoId)
                .update_columns([
                    Column::ViewCount,
                    Column::LikeCount,
                    Column::CommentCount,
                    Column::Tags,
                    Column::IsShorts,
                    Column::IsEligible,
                    Column::PrivacyStatus,
                    Column::UploadStatus,
                    Column::IsEmbeddable,
                    Column::ThumbnailUrl,
                    Column::ThumbnailMediumUrl,
                    Column::ThumbnailHighUrl,
                    Column::ThumbnailStandardUrl,
                    Column::ThumbnailMaxresUrl,
                    Column::Title,
                    Column::Description,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_video_id(
        &self,
        video_id: &str,
    ) -> Result<Option<entity::youtube_video::Model>, DbErr> {
        entity::prelude::YoutubeVideo::find()
            .filter(entity::youtube_video::Column::VideoId.eq(video_id))
            .one(self.db)
            .await
    }

    /// Videos of a channel that can earn CONTENT points: eligible, public and processed.
    pub async fn get_scorable_by_channel(
        &self,
        channel_id: i32,
    ) -> Result<Vec<entity::youtube_video::Model>, DbErr> {
        entity::prelude::YoutubeVideo::find()
            .filter(entity::youtube_video::Column::ChannelId.eq(channel_id))
            .filter(entity::youtube_video::Column::IsEligible.eq(true))
            .filter(entity::youtube_video::Column::PrivacyStatus.eq("public"))
            .filter(entity::youtube_video::Column::UploadStatus.eq("processed"))
            .order_by_asc(entity::youtube_video::Column::Id)
            .all(self.db)
            .await
    }

    /// Whether any of `channel_ids` has an eligible video published at or after `since`.
    pub async fn has_eligible_since(
        &self,
        channel_ids: Vec<i32>,
        since: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        if channel_ids.is_empty() {
            return Ok(false);
        }

        let video = entity::prelude::YoutubeVideo::find()
            .filter(entity::youtube_video::Column::ChannelId.is_in(channel_ids))
            .filter(entity::youtube_video::Column::IsEligible.eq(true))
            .filter(entity::youtube_video::Column::PublishedAt.gte(since))
            .one(self.db)
            .await?;

        Ok(video.is_some())
    }

    /// Videos of the given channels published at or after `since`, most viewed first.
    pub async fn get_published_since(
        &self,
        channel_ids: Vec<i32>,
        since: DateTime<Utc>,
    ) -> Result<Vec<entity::youtube_video::Model>, DbErr> {
        if channel_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::YoutubeVideo::find()
            .filter(entity::youtube_video::Column::ChannelId.is_in(channel_ids))
            .filter(entity::youtube_video::Column::PublishedAt.gte(since))
            .order_by_desc(entity::youtube_video::Column::ViewCount)
            .order_by_asc(entity::youtube_video::Column::Id)
            .all(self.db)
            .await
    }
}
