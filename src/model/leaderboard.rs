use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// `ALL`, `1D`, `1W`, `1M` or `3M`. Defaults to `ALL`.
    pub period: Option<String>,
    /// `total`, `contents`, `referral`, `event`, `profit`, `boost` or `sponsor`.
    pub category: Option<String>,
    /// `desc` or `asc`. Defaults to `desc`.
    pub sort: Option<String>,
    /// 1-based page. Defaults to 1.
    pub page: Option<u64>,
    /// Entries per page, at most 100. Defaults to 10.
    pub limit: Option<u64>,
    /// Overrides `page` when present.
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    pub period: Option<String>,
}

/// Points per category on a leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryPointsDto {
    pub contents: i64,
    /// Stored as `mgm`.
    pub referral: i64,
    pub event: i64,
    pub profit: i64,
    pub boost: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryChannelDto {
    pub title: String,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryUserDto {
    pub x_handle: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub rank: i32,
    pub user_id: i32,
    pub channel_id: i32,
    pub total_points: i64,
    pub points: EntryPointsDto,
    pub channel: EntryChannelDto,
    pub user: EntryUserDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPageDto {
    pub period: String,
    pub category: String,
    pub sort: String,
    /// `null` when no snapshot exists for the period.
    pub snapshot_date: Option<NaiveDate>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub entries: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserChannelRankDto {
    pub channel_id: i32,
    pub rank: i32,
    pub channel_title: String,
}

/// A user's best-ranked channel plus every ranked channel they own.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRankDto {
    pub period: String,
    pub snapshot_date: NaiveDate,
    pub rank: i32,
    pub channel_id: i32,
    pub total_points: i64,
    pub points: EntryPointsDto,
    pub channel: EntryChannelDto,
    pub all_channels: Vec<UserChannelRankDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Top3Dto {
    pub period: String,
    pub snapshot_date: Option<NaiveDate>,
    pub top3: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardStatsDto {
    pub period: String,
    pub snapshot_date: NaiveDate,
    pub total_entries: u64,
    pub average_points: i64,
    pub total_points: i64,
    pub max_points: i64,
    pub min_points: i64,
}
