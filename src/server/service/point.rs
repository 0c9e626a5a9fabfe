//! Point ledger service.
//!
//! [`award_in`] is the only writer of the ledger. It appends the transaction
//! and applies the same amount to the user's summary and today's roll-up, all
//! on the connection it is given. Callers that combine an award with other
//! writes pass their open transaction; [`PointService::add_points`] opens its
//! own.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::point::{
        DailyPointsDto, PointHistoryDto, PointHistoryQuery, PointSlotsDto, PointSummaryDto,
        PointTransactionDto,
    },
    server::{
        data::point::{PointRepository, TransactionFilter},
        error::AppError,
        model::point::{AwardPointsParam, PointCategory},
        util::time::kst_today,
    },
};

const DEFAULT_HISTORY_LIMIT: u64 = 30;
const MAX_HISTORY_LIMIT: u64 = 100;
const DEFAULT_DAILY_DAYS: i64 = 30;

/// Records one award on `conn`.
///
/// # Arguments
/// - `conn` - Open transaction (or connection) the three writes run on
/// - `param` - Recipient, category, amount, reason and metadata
///
/// # Returns
/// - `Ok(Model)` - The appended ledger row
/// - `Err(DbErr)` - Any of the writes failed; the caller's transaction should roll back
pub async fn award_in<C: ConnectionTrait>(
    conn: &C,
    param: &AwardPointsParam,
) -> Result<entity::point_transaction::Model, DbErr> {
    let repo = PointRepository::new(conn);

    let transaction = repo.insert_transaction(param).await?;
    repo.add_to_summary(param.user_id, param.category, param.amount)
        .await?;
    repo.add_to_history(param.user_id, kst_today(), param.category, param.amount)
        .await?;

    Ok(transaction)
}

pub struct PointService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PointService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Awards points in a transaction of its own.
    ///
    /// # Returns
    /// - `Ok(Model)` - The appended ledger row
    /// - `Err(AppError::DbErr)` - The award was rolled back
    pub async fn add_points(
        &self,
        param: AwardPointsParam,
    ) -> Result<entity::point_transaction::Model, AppError> {
        let txn = self.db.begin().await?;
        let transaction = award_in(&txn, &param).await?;
        txn.commit().await?;

        tracing::debug!(
            "Awarded {} {} points to user {}: {}",
            param.amount,
            param.category,
            param.user_id,
            param.reason
        );

        Ok(transaction)
    }

    /// Current slot totals, zeros when the user has no summary yet.
    pub async fn get_summary(&self, user_id: i32) -> Result<PointSummaryDto, AppError> {
        let summary = PointRepository::new(self.db).find_summary(user_id).await?;

        Ok(summary
            .map(PointSummaryDto::from)
            .unwrap_or_else(|| PointSummaryDto::empty(user_id)))
    }

    pub async fn get_by_slot(&self, user_id: i32) -> Result<PointSlotsDto, AppError> {
        Ok(self.get_summary(user_id).await?.into())
    }

    /// Transactions matching the query, newest first.
    ///
    /// # Returns
    /// - `Ok(PointHistoryDto)` - The page and the filtered total
    /// - `Err(AppError::BadRequest)` - Invalid date, category or limit
    pub async fn get_history(
        &self,
        user_id: i32,
        query: PointHistoryQuery,
    ) -> Result<PointHistoryDto, AppError> {
        let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_HISTORY_LIMIT
            )));
        }

        let category = query
            .category
            .as_deref()
            .map(str::parse::<PointCategory>)
            .transpose()
            .map_err(AppError::BadRequest)?;

        let filter = TransactionFilter {
            category,
            start: query
                .start_date
                .as_deref()
                .map(|s| parse_bound(s, false))
                .transpose()?,
            end: query
                .end_date
                .as_deref()
                .map(|s| parse_bound(s, true))
                .transpose()?,
            limit,
            offset: query.offset.unwrap_or(0),
        };

        let (transactions, total) = PointRepository::new(self.db)
            .get_transactions(user_id, &filter)
            .await?;

        Ok(PointHistoryDto {
            total,
            transactions: transactions
                .into_iter()
                .map(PointTransactionDto::from)
                .collect(),
            limit: filter.limit,
            offset: filter.offset,
        })
    }

    /// Daily roll-ups for the last `days` days, newest first.
    pub async fn get_daily(
        &self,
        user_id: i32,
        days: Option<i64>,
    ) -> Result<Vec<DailyPointsDto>, AppError> {
        let days = days.unwrap_or(DEFAULT_DAILY_DAYS);
        if days < 1 {
            return Err(AppError::BadRequest(
                "days must be a positive number".to_string(),
            ));
        }

        let since = kst_today() - Duration::days(days);
        let history = PointRepository::new(self.db)
            .get_history_since(user_id, since)
            .await?;

        Ok(history.into_iter().map(DailyPointsDto::from).collect())
    }
}

/// Parses an RFC 3339 timestamp or a plain date.
///
/// A plain date used as an upper bound covers the whole day.
fn parse_bound(value: &str, end_of_day: bool) -> Result<DateTime<Utc>, AppError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", value)))?;
    let time = if end_of_day {
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
    } else {
        NaiveTime::MIN
    };

    Ok(date.and_time(time).and_utc())
}
