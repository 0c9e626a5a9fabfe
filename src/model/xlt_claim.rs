use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEligibilityDto {
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub min_points: i64,
    pub current_points: i64,
    pub has_sbt: bool,
    pub total_claimed_xlt: f64,
    pub max_total_xlt: f64,
    pub is_within_mvp_period: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestClaimDto {
    pub points: i64,
    pub wallet_address: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequestedDto {
    pub success: bool,
    pub message: String,
    pub claim_id: i32,
    pub points_claimed: i64,
    pub xlt_amount: f64,
    pub status: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClaimListQuery {
    /// `PENDING`, `APPROVED`, `REJECTED`, `COMPLETED` or `CANCELLED`.
    pub status: Option<String>,
    /// 1-based. Defaults to 1.
    pub page: Option<u64>,
    /// Defaults to 10.
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDto {
    pub id: i32,
    pub points_claimed: i64,
    pub xlt_amount: f64,
    pub wallet_address: Option<String>,
    pub status: String,
    pub memo: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimListDto {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub claims: Vec<ClaimDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatsDto {
    pub total_requests: u64,
    pub total_xlt_claimed: f64,
    pub max_total_xlt: f64,
    pub remaining_xlt: f64,
    pub progress_percentage: f64,
    pub mvp_end_date: String,
    pub exchange_rate: i64,
}
