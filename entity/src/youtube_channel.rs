use sea_orm::entity::prelude::*;

/// A YouTube channel registered by a user.
///
/// `channel_id` is YouTube's own `UC…` identifier and is not unique on its own:
/// a channel can be registered again after a stale registration is removed.
/// Only one row per `channel_id` may be verified at a time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "youtube_channels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub channel_id: String,
    pub channel_url: String,
    pub channel_title: String,
    pub thumbnail_url: Option<String>,
    pub subscriber_count: i64,
    pub video_count: i64,
    pub view_count: i64,
    pub verification_code: String,
    pub is_verified: bool,
    pub verified_at: Option<DateTimeUtc>,
    pub verification_attempts: i32,
    pub first_registered_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::youtube_video::Entity")]
    YoutubeVideo,
    #[sea_orm(has_many = "super::channel_daily_snapshot::Entity")]
    ChannelDailySnapshot,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::youtube_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YoutubeVideo.def()
    }
}

impl Related<super::channel_daily_snapshot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChannelDailySnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
