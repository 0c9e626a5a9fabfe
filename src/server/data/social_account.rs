//! Social account repository.
//!
//! One row per (user, platform, account) linking a user to an external identity.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{Platform, UpsertSocialAccountParam};

pub struct SocialAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SocialAccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a social account.
    ///
    /// Conflicts on (user_id, platform, account_id) update the profile fields and
    /// the verification flag. `is_primary` is set for X accounts only.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted or updated account
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpsertSocialAccountParam,
    ) -> Result<entity::social_account::Model, DbErr> {
        use entity::social_account::Column;

        let now = Utc::now();

        entity::prelude::SocialAccount::insert(entity::social_account::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            platform: ActiveValue::Set(param.platform.as_str().to_string()),
            account_id: ActiveValue::Set(param.account_id),
            handle: ActiveValue::Set(param.handle),
            display_name: ActiveValue::Set(param.display_name),
            profile_image: ActiveValue::Set(param.profile_image),
            is_verified: ActiveValue::Set(param.is_verified),
            is_primary: ActiveValue::Set(param.platform == Platform::X),
            connected_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::UserId, Column::Platform, Column::AccountId])
                .update_columns([
                    Column::Handle,
                    Column::DisplayName,
                    Column::ProfileImage,
                    Column::IsVerified,
                    Column::IsPrimary,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// All accounts of a user, most recently connected first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::social_account::Model>, DbErr> {
        entity::prelude::SocialAccount::find()
            .filter(entity::social_account::Column::UserId.eq(user_id))
            .order_by_desc(entity::social_account::Column::ConnectedAt)
            .all(self.db)
            .await
    }

    /// Whether the user has a verified account on `platform`.
    pub async fn has_verified(&self, user_id: i32, platform: Platform) -> Result<bool, DbErr> {
        let account = entity::prelude::SocialAccount::find()
            .filter(entity::social_account::Column::UserId.eq(user_id))
            .filter(entity::social_account::Column::Platform.eq(platform.as_str()))
            .filter(entity::social_account::Column::IsVerified.eq(true))
            .one(self.db)
            .await?;

        Ok(account.is_some())
    }
}
