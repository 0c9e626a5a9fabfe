//! Social account factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for linked social accounts.
///
/// Defaults to a verified, non-primary DISCORD account.
pub struct SocialAccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    platform: String,
    account_id: String,
    handle: Option<String>,
    is_verified: bool,
    is_primary: bool,
}

impl<'a> SocialAccountFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            platform: "DISCORD".to_string(),
            account_id: format!("account_{}", id),
            handle: Some(format!("handle{}", id)),
            is_verified: true,
            is_primary: false,
        }
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.is_verified = verified;
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.is_primary = primary;
        self
    }

    pub async fn build(self) -> Result<entity::social_account::Model, DbErr> {
        let now = Utc::now();
        entity::social_account::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            platform: ActiveValue::Set(self.platform),
            account_id: ActiveValue::Set(self.account_id),
            handle: ActiveValue::Set(self.handle),
            display_name: ActiveValue::Set(None),
            profile_image: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(self.is_verified),
            is_primary: ActiveValue::Set(self.is_primary),
            connected_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified account on the given platform.
pub async fn create_social_account(
    db: &DatabaseConnection,
    user_id: i32,
    platform: &str,
) -> Result<entity::social_account::Model, DbErr> {
    SocialAccountFactory::new(db, user_id)
        .platform(platform)
        .build()
        .await
}
