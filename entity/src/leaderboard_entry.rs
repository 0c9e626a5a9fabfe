use sea_orm::entity::prelude::*;

/// One ranked channel in a leaderboard snapshot.
///
/// Unique per (period, rank, snapshot_date). Point columns are copied from the
/// owner's `user_points` at snapshot time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leaderboard_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub channel_id: i32,
    pub period: String,
    pub rank: i32,
    pub total_current: i64,
    pub contents: i64,
    pub mgm: i64,
    pub event: i64,
    pub profit: i64,
    pub sponsor: i64,
    pub boost: i64,
    pub channel_title: String,
    pub channel_image_url: Option<String>,
    pub x_handle: Option<String>,
    pub profile_image_url: Option<String>,
    pub snapshot_date: Date,
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
