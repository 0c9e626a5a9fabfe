use sea_orm::entity::prelude::*;

/// Daily counters of a video, one row per (video_id, snapshot_date).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "video_snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub video_id: i32,
    pub snapshot_date: Date,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::youtube_video::Entity",
        from = "Column::VideoId",
        to = "super::youtube_video::Column::Id",
        on_delete = "Cascade"
    )]
    YoutubeVideo,
}

impl Related<super::youtube_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YoutubeVideo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
