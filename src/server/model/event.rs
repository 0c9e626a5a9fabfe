//! Community event types and participation parameters.

use std::{fmt, str::FromStr};

use crate::model::event::ParticipationDto;

/// Points per unit of vote weight.
pub const POINTS_PER_VOTE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Vote,
    Contest,
    Community,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vote => "VOTE",
            Self::Contest => "CONTEST",
            Self::Community => "COMMUNITY",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VOTE" => Ok(Self::Vote),
            "CONTEST" => Ok(Self::Contest),
            "COMMUNITY" => Ok(Self::Community),
            other => Err(format!("Unknown event type: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticipateParam {
    pub event_type: EventType,
    pub event_id: String,
    pub event_name: Option<String>,
    pub submission_url: Option<String>,
    /// Caller-supplied weight; replaced by the computed weight for votes.
    pub vote_weight: Option<i64>,
}

impl From<entity::event_participation::Model> for ParticipationDto {
    fn from(p: entity::event_participation::Model) -> Self {
        Self {
            id: p.id,
            event_type: p.event_type,
            event_id: p.event_id,
            event_name: p.event_name,
            vote_weight: p.vote_weight,
            submission_url: p.submission_url,
            is_winner: p.is_winner,
            prize: p.prize,
            participated_at: p.participated_at,
        }
    }
}
