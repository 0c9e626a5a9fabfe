use sea_orm::entity::prelude::*;

/// Daily roll-up of a user's point awards, one row per (user_id, date).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "point_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub date: Date,
    pub contents: i64,
    pub referral: i64,
    pub event: i64,
    pub profit: i64,
    pub sponsor: i64,
    pub boost: i64,
    pub day_total: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
