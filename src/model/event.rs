use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipateEventDto {
    /// `VOTE`, `CONTEST` or `COMMUNITY`.
    pub event_type: String,
    pub event_id: String,
    pub event_name: Option<String>,
    pub submission_url: Option<String>,
    /// Ignored for votes, where the weight is derived from points.
    pub vote_weight: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationDto {
    pub id: i32,
    pub event_type: String,
    pub event_id: String,
    pub event_name: Option<String>,
    pub vote_weight: Option<i64>,
    pub submission_url: Option<String>,
    pub is_winner: bool,
    pub prize: Option<String>,
    pub participated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ParticipationQuery {
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUserDto {
    pub id: i32,
    pub x_handle: String,
    pub x_display_name: String,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub user: Option<ParticipantUserDto>,
    pub vote_weight: Option<i64>,
    pub submission_url: Option<String>,
    pub is_winner: bool,
    pub prize: Option<String>,
    pub participated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipantsDto {
    pub event_id: String,
    pub total_participants: usize,
    pub total_vote_weight: i64,
    pub participants: Vec<ParticipantDto>,
}
