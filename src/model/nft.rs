use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub nft_type: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub tier: Option<i32>,
    pub token_id: Option<String>,
    pub contract_address: String,
    pub chain_id: i32,
    #[schema(value_type = Object)]
    pub metadata: Value,
    pub is_burned: bool,
    pub burned_at: Option<DateTime<Utc>>,
    pub minted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NftCollectionQuery {
    /// `SBT`, `TIER`, `REWARD` or `CONNECTION`.
    #[serde(rename = "type")]
    #[param(rename = "type")]
    pub nft_type: Option<String>,
    pub is_burned: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NftCollectionDto {
    pub total: usize,
    pub nfts: Vec<NftDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TierInfoDto {
    pub tier: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub points_required: i64,
    pub points_max: Option<i64>,
    pub upgrade_bonus: f64,
    pub boost_multiplier: f64,
    pub next_tier: Option<i32>,
    pub next_tier_points: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftTypeDto {
    #[serde(rename = "type")]
    pub nft_type: String,
    pub name: String,
    pub description: String,
    pub transferable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<TierInfoDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NftTypesDto {
    pub types: Vec<NftTypeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPassConditionsDto {
    pub youtube_verified: bool,
    pub x_posted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPassEligibilityDto {
    pub eligible: bool,
    pub reason: String,
    /// Absent when the pass was already claimed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<UserPassConditionsDto>,
    pub has_claimed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimUserPassDto {
    pub wallet_address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BurnNftDto {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueRewardNftDto {
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub event_type: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}

/// Result of a mint, burn or claim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NftActionDto {
    pub success: bool,
    pub message: String,
    pub nft: NftDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TierUpgradeDto {
    pub success: bool,
    pub message: String,
    pub old_tier: Option<i32>,
    pub new_tier: i32,
    pub bonus_points: i64,
    pub nft: NftDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextTierDto {
    pub tier: i32,
    pub name: String,
    pub image_url: String,
    pub points_required: i64,
    pub points_needed: i64,
    pub boost_multiplier: f64,
    /// Percent of the way to the next tier, 0 to 100.
    pub progress: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TierBenefitDto {
    pub tier: i32,
    pub name: String,
    pub image_url: String,
    pub points_required: i64,
    pub boost_multiplier: f64,
    pub is_unlocked: bool,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftBenefitsDto {
    pub current_tier: i32,
    pub current_tier_name: String,
    pub current_boost: f64,
    pub total_points: i64,
    pub next_tier: Option<NextTierDto>,
    pub all_tiers: Vec<TierBenefitDto>,
}
