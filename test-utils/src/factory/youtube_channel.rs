//! YouTube channel factory for creating registered channels.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let channel = YoutubeChannelFactory::new(&db, user.id)
///     .channel_id("UCxxxxxxxxxxxxxxxxxxxxxx")
///     .subscriber_count(1_000)
///     .verified(true)
///     .build()
///     .await?;
/// ```
pub struct YoutubeChannelFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    channel_id: String,
    channel_title: String,
    verification_code: String,
    subscriber_count: i64,
    is_verified: bool,
}

impl<'a> YoutubeChannelFactory<'a> {
    /// Creates a new factory for an unverified channel owned by `user_id`.
    ///
    /// Defaults:
    /// - channel_id: `"UC"` followed by a 22 character zero padded counter
    /// - channel_title: `"Channel {id}"`
    /// - verification_code: `"ABCDEF{id % 100}"` padded to 8 characters
    /// - subscriber_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user's id
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            channel_id: format!("UC{:022}", id),
            channel_title: format!("Channel {}", id),
            verification_code: format!("ABCDEF{:02}", id % 100),
            subscriber_count: 0,
            is_verified: false,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn channel_title(mut self, title: impl Into<String>) -> Self {
        self.channel_title = title.into();
        self
    }

    pub fn verification_code(mut self, code: impl Into<String>) -> Self {
        self.verification_code = code.into();
        self
    }

    pub fn subscriber_count(mut self, count: i64) -> Self {
        self.subscriber_count = count;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.is_verified = verified;
        self
    }

    /// Builds and inserts the channel.
    ///
    /// # Returns
    /// - `Ok(entity::youtube_channel::Model)` - Created channel
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::youtube_channel::Model, DbErr> {
        let now = Utc::now();
        entity::youtube_channel::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            channel_url: ActiveValue::Set(format!(
                "https://www.youtube.com/channel/{}",
                self.channel_id
            )),
            channel_id: ActiveValue::Set(self.channel_id),
            channel_title: ActiveValue::Set(self.channel_title),
            thumbnail_url: ActiveValue::Set(None),
            subscriber_count: ActiveValue::Set(self.subscriber_count),
            video_count: ActiveValue::Set(0),
            view_count: ActiveValue::Set(0),
            verification_code: ActiveValue::Set(self.verification_code),
            is_verified: ActiveValue::Set(self.is_verified),
            verified_at: ActiveValue::Set(self.is_verified.then_some(now)),
            verification_attempts: ActiveValue::Set(if self.is_verified { 1 } else { 0 }),
            first_registered_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unverified channel owned by `user_id`.
pub async fn create_channel(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::youtube_channel::Model, DbErr> {
    YoutubeChannelFactory::new(db, user_id).build().await
}

/// Creates a verified channel owned by `user_id`.
pub async fn create_verified_channel(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::youtube_channel::Model, DbErr> {
    YoutubeChannelFactory::new(db, user_id)
        .verified(true)
        .build()
        .await
}
