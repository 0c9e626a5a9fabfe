use sea_orm::entity::prelude::*;

/// A user's entry in a community event, unique per (user_id, event_id).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_participations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub event_type: String,
    pub event_id: String,
    pub event_name: Option<String>,
    pub vote_weight: Option<i64>,
    pub submission_url: Option<String>,
    pub is_winner: bool,
    pub prize: Option<String>,
    pub participated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
