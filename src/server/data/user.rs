//! User data repository.
//!
//! Provides `UserRepository` for creating users at first login, profile updates,
//! tutorial flags and the lookups used by referrals and email recovery.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::user::{Platform, UpdateUserParam, XProfile};

/// Repository providing database operations for users.
///
/// Generic over the connection so it can run inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user from an X profile.
    ///
    /// # Arguments
    /// - `profile` - X identity of the new user
    /// - `referral_code` - Unique code generated for the user
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique violations on x_id or code
    pub async fn create(
        &self,
        profile: &XProfile,
        referral_code: &str,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            x_id: ActiveValue::Set(profile.x_id.clone()),
            x_handle: ActiveValue::Set(profile.handle.clone()),
            x_display_name: ActiveValue::Set(profile.display_name.clone()),
            profile_image_url: ActiveValue::Set(profile.profile_image_url.clone()),
            email: ActiveValue::Set(None),
            wallet_address: ActiveValue::Set(None),
            referral_code: ActiveValue::Set(referral_code.to_string()),
            primary_platform: ActiveValue::Set(Platform::X.as_str().to_string()),
            is_admin: ActiveValue::Set(false),
            has_completed_tutorial: ActiveValue::Set(false),
            tutorial_completed_at: ActiveValue::Set(None),
            tutorial_skipped_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Refreshes the X handle, display name and image of an existing user.
    pub async fn update_x_profile(
        &self,
        user: entity::user::Model,
        profile: &XProfile,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active = user.into_active_model();
        active.x_handle = ActiveValue::Set(profile.handle.clone());
        active.x_display_name = ActiveValue::Set(profile.display_name.clone());
        active.profile_image_url = ActiveValue::Set(profile.profile_image_url.clone());
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Finds a user by database id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_x_id(&self, x_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::XId.eq(x_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_referral_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ReferralCode.eq(code))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds the owner of a wallet address.
    pub async fn find_by_wallet(
        &self,
        wallet_address: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::WalletAddress.eq(wallet_address))
            .one(self.db)
            .await
    }

    /// Loads several users at once, in no particular order.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Applies the provided profile fields, leaving absent fields unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - User does not exist
    /// - `Err(DbErr)` - Database error, including a duplicate wallet address
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        if let Some(name) = param.x_display_name {
            active.x_display_name = ActiveValue::Set(name);
        }
        if let Some(url) = param.profile_image_url {
            active.profile_image_url = ActiveValue::Set(Some(url));
        }
        if let Some(wallet) = param.wallet_address {
            active.wallet_address = ActiveValue::Set(Some(wallet));
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Stamps the tutorial as finished, recording either a completion or a skip.
    pub async fn mark_tutorial(
        &self,
        user: entity::user::Model,
        skipped: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        let mut active = user.into_active_model();
        active.has_completed_tutorial = ActiveValue::Set(true);
        if skipped {
            active.tutorial_skipped_at = ActiveValue::Set(Some(now));
        } else {
            active.tutorial_completed_at = ActiveValue::Set(Some(now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }
}
