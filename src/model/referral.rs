use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReferralDto {
    pub referral_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralDto {
    pub id: i32,
    pub referrer_id: i32,
    pub referee_id: i32,
    pub referral_code: String,
    pub is_joined: bool,
    pub is_discord_joined: bool,
    pub is_video_posted: bool,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralProgressDto {
    pub is_joined: bool,
    pub is_discord_joined: bool,
    pub is_video_posted: bool,
    pub is_completed: bool,
}

/// Public basics of the other side of a referral.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralUserDto {
    pub id: i32,
    pub x_handle: String,
    pub x_display_name: String,
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralDetailDto {
    pub id: i32,
    pub referee: Option<ReferralUserDto>,
    pub progress: ReferralProgressDto,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyReferralsDto {
    pub total: usize,
    pub completed: usize,
    pub referrals: Vec<ReferralDetailDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyReferrerDto {
    pub referrer: Option<ReferralUserDto>,
    pub progress: ReferralProgressDto,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralStatsDto {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub joined_only: usize,
    pub discord_joined: usize,
    pub video_posted: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralLinkStatsDto {
    pub total_referrals: usize,
    pub completed_referrals: usize,
    pub pending_referrals: usize,
    pub total_points_earned: i64,
    pub pending_points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralLinkDto {
    pub referral_code: String,
    pub referral_url: String,
    pub qr_code_url: String,
    pub share_text: String,
    pub stats: ReferralLinkStatsDto,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShareUrlQuery {
    /// `referral`, `achievement` or `nft_upgrade`. Defaults to `referral`.
    #[serde(rename = "type")]
    #[param(rename = "type")]
    pub share_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareUrlDto {
    pub share_url: String,
    pub tweet_text: String,
    pub referral_url: String,
    #[serde(rename = "type")]
    pub share_type: String,
    pub note: String,
}
