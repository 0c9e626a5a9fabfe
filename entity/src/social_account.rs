use sea_orm::entity::prelude::*;

/// Link between a user and an identity on an external platform.
///
/// `platform` is one of `YOUTUBE`, `X`, `INSTAGRAM` or `DISCORD`. A user holds at
/// most one row per (platform, account_id).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub platform: String,
    pub account_id: String,
    pub handle: Option<String>,
    pub display_name: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_primary: bool,
    pub connected_at: DateTimeUtc,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
