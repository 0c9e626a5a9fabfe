use sea_orm::entity::prelude::*;

/// Daily channel statistics, one row per (channel_id, snapshot_date).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channel_daily_snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub channel_id: i32,
    pub snapshot_date: Date,
    pub subscriber_count: i64,
    pub video_count: i64,
    pub view_count: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::youtube_channel::Entity",
        from = "Column::ChannelId",
        to = "super::youtube_channel::Column::Id",
        on_delete = "Cascade"
    )]
    YoutubeChannel,
}

impl Related<super::youtube_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YoutubeChannel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
