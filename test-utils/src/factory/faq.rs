//! FAQ factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for FAQ entries. Defaults to a published, unpinned `General` entry.
pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    question_en: String,
    answer_en: String,
    question_ko: String,
    answer_ko: String,
    category: String,
    order_index: i32,
    is_published: bool,
    is_pinned: bool,
}

impl<'a> FaqFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question_en: format!("Question {}", id),
            answer_en: format!("Answer {}", id),
            question_ko: format!("질문 {}", id),
            answer_ko: format!("답변 {}", id),
            category: "General".to_string(),
            order_index: 0,
            is_published: true,
            is_pinned: false,
        }
    }

    pub fn question_en(mut self, question: impl Into<String>) -> Self {
        self.question_en = question.into();
        self
    }

    pub fn answer_en(mut self, answer: impl Into<String>) -> Self {
        self.answer_en = answer.into();
        self
    }

    pub fn question_ko(mut self, question: impl Into<String>) -> Self {
        self.question_ko = question.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.is_published = published;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = pinned;
        self
    }

    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        let now = Utc::now();
        entity::faq::ActiveModel {
            question_ko: ActiveValue::Set(self.question_ko),
            question_en: ActiveValue::Set(self.question_en),
            answer_ko: ActiveValue::Set(self.answer_ko),
            answer_en: ActiveValue::Set(self.answer_en),
            category: ActiveValue::Set(self.category),
            order_index: ActiveValue::Set(self.order_index),
            is_published: ActiveValue::Set(self.is_published),
            is_pinned: ActiveValue::Set(self.is_pinned),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published FAQ entry with default text.
pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db).build().await
}
