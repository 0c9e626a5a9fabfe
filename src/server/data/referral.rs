//! Referral repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Progress flags recomputed by the completion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralProgress {
    pub is_discord_joined: bool,
    pub is_video_posted: bool,
}

pub struct ReferralRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReferralRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that `referee_id` joined through `referrer_id`'s code.
    pub async fn create(
        &self,
        referrer_id: i32,
        referee_id: i32,
        referral_code: &str,
    ) -> Result<entity::referral::Model, DbErr> {
        let now = Utc::now();

        entity::referral::ActiveModel {
            referrer_id: ActiveValue::Set(referrer_id),
            referee_id: ActiveValue::Set(referee_id),
            referral_code: ActiveValue::Set(referral_code.to_string()),
            is_joined: ActiveValue::Set(true),
            is_discord_joined: ActiveValue::Set(false),
            is_video_posted: ActiveValue::Set(false),
            is_completed: ActiveValue::Set(false),
            completed_at: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::referral::Model>, DbErr> {
        entity::prelude::Referral::find_by_id(id).one(self.db).await
    }

    /// The referral in which `referee_id` was referred, if any.
    pub async fn find_by_referee(
        &self,
        referee_id: i32,
    ) -> Result<Option<entity::referral::Model>, DbErr> {
        entity::prelude::Referral::find()
            .filter(entity::referral::Column::RefereeId.eq(referee_id))
            .one(self.db)
            .await
    }

    /// Referrals made by `referrer_id`, newest first.
    pub async fn get_by_referrer(
        &self,
        referrer_id: i32,
    ) -> Result<Vec<entity::referral::Model>, DbErr> {
        entity::prelude::Referral::find()
            .filter(entity::referral::Column::ReferrerId.eq(referrer_id))
            .order_by_desc(entity::referral::Column::CreatedAt)
            .order_by_desc(entity::referral::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_incomplete(&self) -> Result<Vec<entity::referral::Model>, DbErr> {
        entity::prelude::Referral::find()
            .filter(entity::referral::Column::IsCompleted.eq(false))
            .order_by_asc(entity::referral::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets `is_discord_joined` on every referral of `referee_id` not yet flagged.
    pub async fn mark_discord_joined(&self, referee_id: i32) -> Result<u64, DbErr> {
        use entity::referral::Column;

        let result = entity::prelude::Referral::update_many()
            .col_expr(Column::IsDiscordJoined, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::RefereeId.eq(referee_id))
            .filter(Column::IsDiscordJoined.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn update_progress(
        &self,
        referral: entity::referral::Model,
        progress: ReferralProgress,
    ) -> Result<entity::referral::Model, DbErr> {
        let mut active = referral.into_active_model();
        active.is_discord_joined = ActiveValue::Set(progress.is_discord_joined);
        active.is_video_posted = ActiveValue::Set(progress.is_video_posted);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn mark_completed(
        &self,
        referral: entity::referral::Model,
        completed_at: DateTime<Utc>,
    ) -> Result<entity::referral::Model, DbErr> {
        let mut active = referral.into_active_model();
        active.is_completed = ActiveValue::Set(true);
        active.completed_at = ActiveValue::Set(Some(completed_at));
        active.updated_at = ActiveValue::Set(completed_at);

        active.update(self.db).await
    }
}
