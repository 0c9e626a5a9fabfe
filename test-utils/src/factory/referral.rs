//! Referral factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for referrals. Defaults to a joined, incomplete referral.
pub struct ReferralFactory<'a> {
    db: &'a DatabaseConnection,
    referrer_id: i32,
    referee_id: i32,
    referral_code: String,
    is_discord_joined: bool,
    is_video_posted: bool,
    is_completed: bool,
    joined_at: DateTime<Utc>,
}

impl<'a> ReferralFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, referrer_id: i32, referee_id: i32) -> Self {
        Self {
            db,
            referrer_id,
            referee_id,
            referral_code: "REF000".to_string(),
            is_discord_joined: false,
            is_video_posted: false,
            is_completed: false,
            joined_at: Utc::now(),
        }
    }

    pub fn referral_code(mut self, code: impl Into<String>) -> Self {
        self.referral_code = code.into();
        self
    }

    pub fn discord_joined(mut self, joined: bool) -> Self {
        self.is_discord_joined = joined;
        self
    }

    pub fn video_posted(mut self, posted: bool) -> Self {
        self.is_video_posted = posted;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.is_completed = completed;
        self
    }

    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    pub async fn build(self) -> Result<entity::referral::Model, DbErr> {
        let now = Utc::now();
        entity::referral::ActiveModel {
            referrer_id: ActiveValue::Set(self.referrer_id),
            referee_id: ActiveValue::Set(self.referee_id),
            referral_code: ActiveValue::Set(self.referral_code),
            is_joined: ActiveValue::Set(true),
            is_discord_joined: ActiveValue::Set(self.is_discord_joined),
            is_video_posted: ActiveValue::Set(self.is_video_posted),
            is_completed: ActiveValue::Set(self.is_completed),
            completed_at: ActiveValue::Set(self.is_completed.then_some(now)),
            joined_at: ActiveValue::Set(self.joined_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a joined, incomplete referral.
pub async fn create_referral(
    db: &DatabaseConnection,
    referrer_id: i32,
    referee_id: i32,
) -> Result<entity::referral::Model, DbErr> {
    ReferralFactory::new(db, referrer_id, referee_id).build().await
}
