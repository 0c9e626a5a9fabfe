//! Point ledger repository.
//!
//! Three tables make up the ledger: the append-only `point_transactions`, the
//! per-user `user_points` summary and the per-day `point_history` roll-up. The
//! write methods here are only called by the ledger service, which runs them in
//! a single transaction.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::point::{AwardPointsParam, PointCategory};

/// Filters for a user's transaction list.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub category: Option<PointCategory>,
    /// Inclusive lower bound on `created_at`.
    pub start: Option<chrono::DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub end: Option<chrono::DateTime<Utc>>,
    pub limit: u64,
    pub offset: u64,
}

pub struct PointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn summary_column(category: PointCategory) -> entity::user_points::Column {
    use entity::user_points::Column;

    match category {
        PointCategory::Content => Column::Slot01Content,
        PointCategory::Referral => Column::Slot02Mgm,
        PointCategory::Event => Column::Slot03Event,
        PointCategory::Profit => Column::Slot04Profit,
        PointCategory::Sponsor => Column::Slot05Sponsor,
        PointCategory::Boost => Column::Slot06Boost,
    }
}

fn history_column(category: PointCategory) -> entity::point_history::Column {
    use entity::point_history::Column;

    match category {
        PointCategory::Content => Column::Contents,
        PointCategory::Referral => Column::Referral,
        PointCategory::Event => Column::Event,
        PointCategory::Profit => Column::Profit,
        PointCategory::Sponsor => Column::Sponsor,
        PointCategory::Boost => Column::Boost,
    }
}

impl<'a, C: ConnectionTrait> PointRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an all-zero summary row for a new user.
    pub async fn create_summary(&self, user_id: i32) -> Result<entity::user_points::Model, DbErr> {
        entity::user_points::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            slot_01_content: ActiveValue::Set(0),
            slot_02_mgm: ActiveValue::Set(0),
            slot_03_event: ActiveValue::Set(0),
            slot_04_profit: ActiveValue::Set(0),
            slot_05_sponsor: ActiveValue::Set(0),
            slot_06_boost: ActiveValue::Set(0),
            total_points: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_summary(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_points::Model>, DbErr> {
        entity::prelude::UserPoints::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// All summaries with at least `min_total` points, highest first.
    pub async fn get_summaries_from(
        &self,
        min_total: i64,
    ) -> Result<Vec<entity::user_points::Model>, DbErr> {
        entity::prelude::UserPoints::find()
            .filter(entity::user_points::Column::TotalPoints.gte(min_total))
            .order_by_desc(entity::user_points::Column::TotalPoints)
            .all(self.db)
            .await
    }

    pub async fn get_summaries_for(
        &self,
        user_ids: Vec<i32>,
    ) -> Result<Vec<entity::user_points::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::UserPoints::find()
            .filter(entity::user_points::Column::UserId.is_in(user_ids))
            .all(self.db)
            .await
    }

    /// Appends a ledger row.
    pub async fn insert_transaction(
        &self,
        param: &AwardPointsParam,
    ) -> Result<entity::point_transaction::Model, DbErr> {
        entity::point_transaction::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            amount: ActiveValue::Set(param.amount),
            reason: ActiveValue::Set(param.reason.clone()),
            metadata: ActiveValue::Set(param.metadata.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds `amount` to the category slot and the total, creating the summary if absent.
    pub async fn add_to_summary(
        &self,
        user_id: i32,
        category: PointCategory,
        amount: i64,
    ) -> Result<(), DbErr> {
        use entity::user_points::Column;

        if self.find_summary(user_id).await?.is_none() {
            self.create_summary(user_id).await?;
        }

        let slot = summary_column(category);
        entity::prelude::UserPoints::update_many()
            .col_expr(slot, Expr::col(slot).add(amount))
            .col_expr(Column::TotalPoints, Expr::col(Column::TotalPoints).add(amount))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds `amount` to the user's roll-up row for `date`, creating it if absent.
    pub async fn add_to_history(
        &self,
        user_id: i32,
        date: NaiveDate,
        category: PointCategory,
        amount: i64,
    ) -> Result<(), DbErr> {
        use entity::point_history::Column;

        let existing = entity::prelude::PointHistory::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Date.eq(date))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::point_history::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                date: ActiveValue::Set(date),
                contents: ActiveValue::Set(0),
                referral: ActiveValue::Set(0),
                event: ActiveValue::Set(0),
                profit: ActiveValue::Set(0),
                sponsor: ActiveValue::Set(0),
                boost: ActiveValue::Set(0),
                day_total: ActiveValue::Set(0),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        let column = history_column(category);
        entity::prelude::PointHistory::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .col_expr(Column::DayTotal, Expr::col(Column::DayTotal).add(amount))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Date.eq(date))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// A page of the user's transactions, newest first, with the filtered total.
    pub async fn get_transactions(
        &self,
        user_id: i32,
        filter: &TransactionFilter,
    ) -> Result<(Vec<entity::point_transaction::Model>, u64), DbErr> {
        use entity::point_transaction::Column;

        let mut condition = Condition::all().add(Column::UserId.eq(user_id));
        if let Some(category) = filter.category {
            condition = condition.add(Column::Category.eq(category.as_str()));
        }
        if let Some(start) = filter.start {
            condition = condition.add(Column::CreatedAt.gte(start));
        }
        if let Some(end) = filter.end {
            condition = condition.add(Column::CreatedAt.lte(end));
        }

        let total = entity::prelude::PointTransaction::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let transactions = entity::prelude::PointTransaction::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db)
            .await?;

        Ok((transactions, total))
    }

    /// Roll-up rows on or after `since`, newest first.
    pub async fn get_history_since(
        &self,
        user_id: i32,
        since: NaiveDate,
    ) -> Result<Vec<entity::point_history::Model>, DbErr> {
        entity::prelude::PointHistory::find()
            .filter(entity::point_history::Column::UserId.eq(user_id))
            .filter(entity::point_history::Column::Date.gte(since))
            .order_by_desc(entity::point_history::Column::Date)
            .all(self.db)
            .await
    }
}
