use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub x_id: String,
    pub x_handle: String,
    pub x_display_name: String,
    pub profile_image_url: Option<String>,
    pub email: Option<String>,
    #[sea_orm(unique)]
    pub wallet_address: Option<String>,
    #[sea_orm(unique)]
    pub referral_code: String,
    pub primary_platform: String,
    pub is_admin: bool,
    pub has_completed_tutorial: bool,
    pub tutorial_completed_at: Option<DateTimeUtc>,
    pub tutorial_skipped_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::youtube_channel::Entity")]
    YoutubeChannel,
    #[sea_orm(has_many = "super::social_account::Entity")]
    SocialAccount,
}

impl Related<super::youtube_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YoutubeChannel.def()
    }
}

impl Related<super::social_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
