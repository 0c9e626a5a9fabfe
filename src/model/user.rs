use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i32,
    pub x_id: String,
    pub x_handle: String,
    pub x_display_name: String,
    pub profile_image_url: Option<String>,
    pub email: Option<String>,
    pub wallet_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub x_display_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectWalletDto {
    pub wallet_address: String,
}

/// Link state of one platform.
///
/// Connected accounts carry their details; other platforms carry a message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountStatusDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_at: Option<DateTime<Utc>>,
    /// `connected`, `not_connected` or `coming_soon`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialAccountsDto {
    pub youtube: SocialAccountStatusDto,
    pub x: SocialAccountStatusDto,
    pub instagram: SocialAccountStatusDto,
    pub discord: SocialAccountStatusDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointsEarnedDto {
    pub from_views: i64,
    pub from_likes: i64,
    pub from_comments: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopVideoDto {
    pub video_id: String,
    pub title: String,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub points_earned: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatsDto {
    pub period: String,
    pub total_videos: usize,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub points_earned: PointsEarnedDto,
    pub top_videos: Vec<TopVideoDto>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityStatsQuery {
    /// `7d`, `30d`, `90d` or `all`. Defaults to `7d`.
    pub period: Option<String>,
}
