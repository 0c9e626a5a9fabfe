use sea_orm::entity::prelude::*;

/// One-time code mailed for account recovery.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "email_verification_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub code: String,
    pub expires_at: DateTimeUtc,
    pub is_used: bool,
    pub used_at: Option<DateTimeUtc>,
    /// Set once the verification has logged its owner in.
    pub recovered_at: Option<DateTimeUtc>,
    pub attempts: i32,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
