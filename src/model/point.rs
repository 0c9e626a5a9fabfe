use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Current points per slot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointSummaryDto {
    pub user_id: i32,
    pub contents: i64,
    pub mgm: i64,
    pub event: i64,
    pub profit: i64,
    pub sponsor: i64,
    pub boost: i64,
    pub current: i64,
    pub updated_at: DateTime<Utc>,
}

/// Slot breakdown without the owner or timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointSlotsDto {
    pub contents: i64,
    pub mgm: i64,
    pub event: i64,
    pub profit: i64,
    pub sponsor: i64,
    pub boost: i64,
    pub current: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointTransactionDto {
    pub id: i32,
    pub category: String,
    pub amount: i64,
    pub reason: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryDto {
    pub total: u64,
    pub transactions: Vec<PointTransactionDto>,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyPointsDto {
    pub date: NaiveDate,
    pub contents: i64,
    pub mgm: i64,
    pub event: i64,
    pub profit: i64,
    pub boost: i64,
    pub current: i64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PointHistoryQuery {
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// CONTENT, REFERRAL, EVENT, PROFIT, SPONSOR or BOOST.
    pub category: Option<String>,
    /// 1..=100, default 30.
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DailyPointsQuery {
    /// Number of days to look back, default 30.
    pub days: Option<i64>,
}
