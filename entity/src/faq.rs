use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faqs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub question_ko: String,
    #[sea_orm(column_type = "Text")]
    pub question_en: String,
    #[sea_orm(column_type = "Text")]
    pub answer_ko: String,
    #[sea_orm(column_type = "Text")]
    pub answer_en: String,
    pub category: String,
    pub order_index: i32,
    pub is_published: bool,
    pub is_pinned: bool,
    pub view_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
