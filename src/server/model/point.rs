//! Point ledger categories and award parameters.

use std::{fmt, str::FromStr};

use chrono::Utc;
use serde_json::Value;

use crate::model::point::{DailyPointsDto, PointSlotsDto, PointSummaryDto, PointTransactionDto};

/// Category of a point award. Each category feeds one summary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCategory {
    /// Slot 01, video engagement.
    Content,
    /// Slot 02, referrals ("MGM").
    Referral,
    /// Slot 03, event participation.
    Event,
    /// Slot 04.
    Profit,
    /// Slot 05.
    Sponsor,
    /// Slot 06, one-off bonuses such as the User Pass and tier upgrades.
    Boost,
}

impl PointCategory {
    pub const ALL: [PointCategory; 6] = [
        Self::Content,
        Self::Referral,
        Self::Event,
        Self::Profit,
        Self::Sponsor,
        Self::Boost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "CONTENT",
            Self::Referral => "REFERRAL",
            Self::Event => "EVENT",
            Self::Profit => "PROFIT",
            Self::Sponsor => "SPONSOR",
            Self::Boost => "BOOST",
        }
    }

    /// Name of the slot as exposed by the API.
    pub fn slot_name(&self) -> &'static str {
        match self {
            Self::Content => "contents",
            Self::Referral => "mgm",
            Self::Event => "event",
            Self::Profit => "profit",
            Self::Sponsor => "sponsor",
            Self::Boost => "boost",
        }
    }

    pub fn slot_number(&self) -> u8 {
        match self {
            Self::Content => 1,
            Self::Referral => 2,
            Self::Event => 3,
            Self::Profit => 4,
            Self::Sponsor => 5,
            Self::Boost => 6,
        }
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointCategory {
    type Err = String;

    /// Parses the stored upper-case name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown point category: {}", s))
    }
}

/// Parameters for a single ledger award.
#[derive(Debug, Clone)]
pub struct AwardPointsParam {
    pub user_id: i32,
    pub category: PointCategory,
    pub amount: i64,
    pub reason: String,
    pub metadata: Option<Value>,
}

impl AwardPointsParam {
    pub fn new(
        user_id: i32,
        category: PointCategory,
        amount: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            category,
            amount,
            reason: reason.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl PointSummaryDto {
    /// Summary for a user who has not earned anything yet.
    pub fn empty(user_id: i32) -> Self {
        Self {
            user_id,
            contents: 0,
            mgm: 0,
            event: 0,
            profit: 0,
            sponsor: 0,
            boost: 0,
            current: 0,
            updated_at: Utc::now(),
        }
    }
}

impl From<entity::user_points::Model> for PointSummaryDto {
    fn from(summary: entity::user_points::Model) -> Self {
        Self {
            user_id: summary.user_id,
            contents: summary.slot_01_content,
            mgm: summary.slot_02_mgm,
            event: summary.slot_03_event,
            profit: summary.slot_04_profit,
            sponsor: summary.slot_05_sponsor,
            boost: summary.slot_06_boost,
            current: summary.total_points,
            updated_at: summary.updated_at,
        }
    }
}

impl From<PointSummaryDto> for PointSlotsDto {
    fn from(summary: PointSummaryDto) -> Self {
        Self {
            contents: summary.contents,
            mgm: summary.mgm,
            event: summary.event,
            profit: summary.profit,
            sponsor: summary.sponsor,
            boost: summary.boost,
            current: summary.current,
        }
    }
}

impl From<entity::point_transaction::Model> for PointTransactionDto {
    fn from(tx: entity::point_transaction::Model) -> Self {
        Self {
            id: tx.id,
            category: tx.category,
            amount: tx.amount,
            reason: tx.reason,
            metadata: tx.metadata,
            created_at: tx.created_at,
        }
    }
}

impl From<entity::point_history::Model> for DailyPointsDto {
    fn from(day: entity::point_history::Model) -> Self {
        Self {
            date: day.date,
            contents: day.contents,
            mgm: day.referral,
            event: day.event,
            profit: day.profit,
            boost: day.boost,
            current: day.day_total,
        }
    }
}
