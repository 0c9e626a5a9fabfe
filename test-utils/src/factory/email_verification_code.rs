//! Email verification code factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for recovery codes. Defaults to an unused code expiring in 15 minutes.
pub struct EmailCodeFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    code: String,
    expires_at: DateTime<Utc>,
    is_used: bool,
    used_at: Option<DateTime<Utc>>,
    attempts: i32,
}

impl<'a> EmailCodeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, email: impl Into<String>) -> Self {
        Self {
            db,
            email: email.into(),
            code: "123456".to_string(),
            expires_at: Utc::now() + Duration::minutes(15),
            is_used: false,
            used_at: None,
            attempts: 0,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn used(mut self, used: bool) -> Self {
        self.is_used = used;
        self
    }

    /// Marks the code as used at `at`.
    pub fn used_at(mut self, at: DateTime<Utc>) -> Self {
        self.is_used = true;
        self.used_at = Some(at);
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    pub async fn build(self) -> Result<entity::email_verification_code::Model, DbErr> {
        let now = Utc::now();
        entity::email_verification_code::ActiveModel {
            email: ActiveValue::Set(self.email),
            code: ActiveValue::Set(self.code),
            expires_at: ActiveValue::Set(self.expires_at),
            is_used: ActiveValue::Set(self.is_used),
            used_at: ActiveValue::Set(self.used_at.or(self.is_used.then_some(now))),
            recovered_at: ActiveValue::Set(None),
            attempts: ActiveValue::Set(self.attempts),
            ip_address: ActiveValue::Set(None),
            user_agent: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unused code `123456` for `email`.
pub async fn create_email_code(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::email_verification_code::Model, DbErr> {
    EmailCodeFactory::new(db, email).build().await
}
