//! Email verification code repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Request context stored alongside an issued code.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

pub struct EmailCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
        meta: RequestMeta,
    ) -> Result<entity::email_verification_code::Model, DbErr> {
        entity::email_verification_code::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            is_used: ActiveValue::Set(false),
            used_at: ActiveValue::Set(None),
            recovered_at: ActiveValue::Set(None),
            attempts: ActiveValue::Set(0),
            ip_address: ActiveValue::Set(meta.ip_address),
            user_agent: ActiveValue::Set(meta.user_agent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Newest unused, unexpired code for `email` that matches `code`.
    pub async fn find_valid(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::email_verification_code::Model>, DbErr> {
        use entity::email_verification_code::Column;

        entity::prelude::EmailVerificationCode::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Code.eq(code))
            .filter(Column::IsUsed.eq(false))
            .filter(Column::ExpiresAt.gt(now))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(self.db)
            .await
    }

    /// Counts a failed attempt against every unused, unexpired code for `email`.
    pub async fn increment_attempts(&self, email: &str, now: DateTime<Utc>) -> Result<u64, DbErr> {
        use entity::email_verification_code::Column;

        let result = entity::prelude::EmailVerificationCode::update_many()
            .col_expr(Column::Attempts, Expr::col(Column::Attempts).add(1))
            .filter(Column::Email.eq(email))
            .filter(Column::IsUsed.eq(false))
            .filter(Column::ExpiresAt.gt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::email_verification_code::Model>, DbErr> {
        entity::prelude::EmailVerificationCode::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn mark_used(
        &self,
        code: entity::email_verification_code::Model,
        at: DateTime<Utc>,
    ) -> Result<entity::email_verification_code::Model, DbErr> {
        let mut active: entity::email_verification_code::ActiveModel = code.into();
        active.is_used = ActiveValue::Set(true);
        active.used_at = ActiveValue::Set(Some(at));

        active.update(self.db).await
    }

    /// Marks a used verification as spent on a recovery.
    ///
    /// # Returns
    /// - `Ok(true)` - This call consumed the verification
    /// - `Ok(false)` - Unknown, unused or already recovered
    pub async fn mark_recovered(&self, id: i32, at: DateTime<Utc>) -> Result<bool, DbErr> {
        use entity::email_verification_code::Column;

        let result = entity::prelude::EmailVerificationCode::update_many()
            .col_expr(Column::RecoveredAt, Expr::value(at))
            .filter(Column::Id.eq(id))
            .filter(Column::IsUsed.eq(true))
            .filter(Column::RecoveredAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
