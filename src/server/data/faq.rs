//! FAQ repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::faq::{CreateFaqParam, FaqQuery, Lang, UpdateFaqParam, DEFAULT_CATEGORY};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Published FAQs matching the query, with the filtered total.
    ///
    /// Every search term must appear in either the question or the answer of
    /// the requested language. Pinned entries come first, then `order_index`
    /// ascending, then newest.
    pub async fn get_published(
        &self,
        query: &FaqQuery,
    ) -> Result<(Vec<entity::faq::Model>, u64), DbErr> {
        use entity::faq::Column;

        let (question, answer) = match query.lang {
            Lang::Ko => (Column::QuestionKo, Column::AnswerKo),
            Lang::En => (Column::QuestionEn, Column::AnswerEn),
        };

        let mut condition = Condition::all().add(Column::IsPublished.eq(true));
        if let Some(category) = &query.category {
            condition = condition.add(Column::Category.eq(category.as_str()));
        }
        for term in query.terms() {
            condition = condition.add(
                Condition::any()
                    .add(question.contains(term.as_str()))
                    .add(answer.contains(term.as_str())),
            );
        }

        let select = entity::prelude::Faq::find().filter(condition);
        let total = select.clone().count(self.db).await?;
        let faqs = select
            .order_by_desc(Column::IsPinned)
            .order_by_asc(Column::OrderIndex)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(query.limit)
            .offset(query.offset)
            .all(self.db)
            .await?;

        Ok((faqs, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::faq::Model>, DbErr> {
        entity::prelude::Faq::find_by_id(id).one(self.db).await
    }

    pub async fn find_published(&self, id: i32) -> Result<Option<entity::faq::Model>, DbErr> {
        entity::prelude::Faq::find_by_id(id)
            .filter(entity::faq::Column::IsPublished.eq(true))
            .one(self.db)
            .await
    }

    /// Bumps `view_count` by one.
    pub async fn increment_views(&self, id: i32) -> Result<(), DbErr> {
        use entity::faq::Column;

        entity::prelude::Faq::update_many()
            .col_expr(Column::ViewCount, Expr::col(Column::ViewCount).add(1))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Distinct categories of published FAQs, sorted.
    pub async fn get_categories(&self) -> Result<Vec<String>, DbErr> {
        use entity::faq::Column;

        entity::prelude::Faq::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::IsPublished.eq(true))
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn create(&self, param: CreateFaqParam) -> Result<entity::faq::Model, DbErr> {
        let now = Utc::now();

        entity::faq::ActiveModel {
            question_ko: ActiveValue::Set(param.question_ko),
            question_en: ActiveValue::Set(param.question_en),
            answer_ko: ActiveValue::Set(param.answer_ko),
            answer_en: ActiveValue::Set(param.answer_en),
            category: ActiveValue::Set(
                param
                    .category
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ),
            order_index: ActiveValue::Set(param.order_index.unwrap_or(0)),
            is_published: ActiveValue::Set(param.is_published.unwrap_or(true)),
            is_pinned: ActiveValue::Set(param.is_pinned.unwrap_or(false)),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the provided fields.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Updated FAQ
    /// - `Ok(None)`: No FAQ with that id
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateFaqParam,
    ) -> Result<Option<entity::faq::Model>, DbErr> {
        let Some(faq) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::faq::ActiveModel = faq.into();
        if let Some(v) = param.question_ko {
            active.question_ko = ActiveValue::Set(v);
        }
        if let Some(v) = param.question_en {
            active.question_en = ActiveValue::Set(v);
        }
        if let Some(v) = param.answer_ko {
            active.answer_ko = ActiveValue::Set(v);
        }
        if let Some(v) = param.answer_en {
            active.answer_en = ActiveValue::Set(v);
        }
        if let Some(v) = param.category {
            active.category = ActiveValue::Set(v);
        }
        if let Some(v) = param.order_index {
            active.order_index = ActiveValue::Set(v);
        }
        if let Some(v) = param.is_published {
            active.is_published = ActiveValue::Set(v);
        }
        if let Some(v) = param.is_pinned {
            active.is_pinned = ActiveValue::Set(v);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// # Returns
    /// - `Ok(true)`: FAQ deleted
    /// - `Ok(false)`: No FAQ with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
