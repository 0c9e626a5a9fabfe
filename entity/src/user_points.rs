use sea_orm::entity::prelude::*;

/// Per-user point summary maintained alongside the ledger.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub slot_01_content: i64,
    pub slot_02_mgm: i64,
    pub slot_03_event: i64,
    pub slot_04_profit: i64,
    pub slot_05_sponsor: i64,
    pub slot_06_boost: i64,
    pub total_points: i64,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
