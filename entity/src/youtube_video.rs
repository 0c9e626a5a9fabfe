use sea_orm::entity::prelude::*;

/// A crawled YouTube video with the latest counters and status flags.
///
/// `channel_id` references `youtube_channels.id`, not YouTube's channel id.
/// `tags` holds the raw tag list as a JSON array of strings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "youtube_videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub channel_id: i32,
    #[sea_orm(unique)]
    pub video_id: String,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub thumbnail_url: String,
    pub thumbnail_medium_url: Option<String>,
    pub thumbnail_high_url: Option<String>,
    pub thumbnail_standard_url: Option<String>,
    pub thumbnail_maxres_url: Option<String>,
    pub published_at: DateTimeUtc,
    pub category_id: Option<String>,
    pub default_language: Option<String>,
    pub default_audio_language: Option<String>,
    pub channel_title: Option<String>,
    pub live_broadcast_content: String,

    pub duration: i32,
    pub definition: Option<String>,
    pub dimension: String,
    pub has_caption: bool,
    pub is_licensed_content: bool,
    pub projection: String,

    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,

    pub privacy_status: String,
    pub upload_status: String,
    pub is_embeddable: bool,
    pub license: String,
    pub is_made_for_kids: bool,
    pub is_public_stats_viewable: bool,

    pub tags: Json,
    pub is_shorts: bool,
    pub is_eligible: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::video_snapshot::Entity")]
    VideoSnapshot,
}

impl Related<super::youtube_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YoutubeChannel.def()
    }
}

impl Related<super::video_snapshot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoSnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
