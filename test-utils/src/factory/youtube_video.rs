//! YouTube video factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for crawled videos.
///
/// Defaults to a public, processed, eligible video published now with zero
/// statistics and the `#XYLO` tag.
pub struct YoutubeVideoFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: i32,
    video_id: String,
    title: String,
    published_at: DateTime<Utc>,
    view_count: i64,
    like_count: i64,
    comment_count: i64,
    privacy_status: String,
    upload_status: String,
    is_eligible: bool,
}

impl<'a> YoutubeVideoFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, channel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            channel_id,
            video_id: format!("vid{:08}", id),
            title: format!("Video {}", id),
            published_at: Utc::now(),
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            privacy_status: "public".to_string(),
            upload_status: "processed".to_string(),
            is_eligible: true,
        }
    }

    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = video_id.into();
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Sets views, likes and comments.
    pub fn stats(mut self, views: i64, likes: i64, comments: i64) -> Self {
        self.view_count = views;
        self.like_count = likes;
        self.comment_count = comments;
        self
    }

    pub fn privacy_status(mut self, status: impl Into<String>) -> Self {
        self.privacy_status = status.into();
        self
    }

    pub fn upload_status(mut self, status: impl Into<String>) -> Self {
        self.upload_status = status.into();
        self
    }

    pub fn eligible(mut self, eligible: bool) -> Self {
        self.is_eligible = eligible;
        self
    }

    pub async fn build(self) -> Result<entity::youtube_video::Model, DbErr> {
        let now = Utc::now();
        entity::youtube_video::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            video_id: ActiveValue::Set(self.video_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            thumbnail_url: ActiveValue::Set(String::new()),
            thumbnail_medium_url: ActiveValue::Set(None),
            thumbnail_high_url: ActiveValue::Set(None),
            thumbnail_standard_url: ActiveValue::Set(None),
            thumbnail_maxres_url: ActiveValue::Set(None),
            published_at: ActiveValue::Set(self.published_at),
            category_id: ActiveValue::Set(None),
            default_language: ActiveValue::Set(None),
            default_audio_language: ActiveValue::Set(None),
            channel_title: ActiveValue::Set(None),
            live_broadcast_content: ActiveValue::Set("none".to_string()),
            duration: ActiveValue::Set(120),
            definition: ActiveValue::Set(Some("hd".to_string())),
            dimension: ActiveValue::Set("2d".to_string()),
            has_caption: ActiveValue::Set(false),
            is_licensed_content: ActiveValue::Set(false),
            projection: ActiveValue::Set("rectangular".to_string()),
            view_count: ActiveValue::Set(self.view_count),
            like_count: ActiveValue::Set(self.like_count),
            comment_count: ActiveValue::Set(self.comment_count),
            privacy_status: ActiveValue::Set(self.privacy_status),
            upload_status: ActiveValue::Set(self.upload_status),
            is_embeddable: ActiveValue::Set(true),
            license: ActiveValue::Set("youtube".to_string()),
            is_made_for_kids: ActiveValue::Set(false),
            is_public_stats_viewable: ActiveValue::Set(true),
            tags: ActiveValue::Set(serde_json::json!(["#XYLO"])),
            is_shorts: ActiveValue::Set(false),
            is_eligible: ActiveValue::Set(self.is_eligible),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an eligible public video on the given channel row.
pub async fn create_video(
    db: &DatabaseConnection,
    channel_id: i32,
) -> Result<entity::youtube_video::Model, DbErr> {
    YoutubeVideoFactory::new(db, channel_id).build().await
}
