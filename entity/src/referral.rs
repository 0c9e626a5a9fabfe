use sea_orm::entity::prelude::*;

/// Referral from `referrer_id` to `referee_id`.
///
/// A user can be referred once, so `referee_id` is unique. Completion requires
/// `is_joined` and `is_discord_joined`; `is_video_posted` is tracked for display.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "referrals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub referrer_id: i32,
    #[sea_orm(unique)]
    pub referee_id: i32,
    pub referral_code: String,
    pub is_joined: bool,
    pub is_discord_joined: bool,
    pub is_video_posted: bool,
    pub is_completed: bool,
    pub completed_at: Option<DateTimeUtc>,
    pub joined_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
