//! XLT claim status and allocation policy.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::model::xlt_claim::ClaimDto;

/// Minimum point balance to request a claim.
pub const MIN_POINTS: i64 = 20_000;

/// Points per XLT.
pub const EXCHANGE_RATE: i64 = 200;

/// XLT allocated across all approved and completed claims.
pub const MAX_TOTAL_SUPPLY: f64 = 500_000.0;

/// Last instant (2026-06-30 23:59:59 KST) at which claims are accepted.
pub fn mvp_end() -> DateTime<Utc> {
    FixedOffset::east_opt(9 * 3600)
        .and_then(|kst| kst.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).single())
        .map(|at| at.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// XLT for a number of points.
pub fn xlt_for_points(points: i64) -> f64 {
    points as f64 / EXCHANGE_RATE as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Statuses whose XLT counts against the total supply.
    pub fn allocated() -> [ClaimStatus; 2] {
        [Self::Approved, Self::Completed]
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(format!("Unknown claim status: {}", other)),
        }
    }
}

/// Result of the four claim checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimEligibility {
    pub eligible: bool,
    /// First failing check, in order: points, SBT, period, supply.
    pub reason: Option<String>,
    pub current_points: i64,
    pub has_sbt: bool,
    pub total_claimed_xlt: f64,
    pub is_within_mvp_period: bool,
}

impl ClaimEligibility {
    pub fn evaluate(
        current_points: i64,
        has_sbt: bool,
        total_claimed_xlt: f64,
        now: DateTime<Utc>,
    ) -> Self {
        let end = mvp_end();
        let is_within_mvp_period = now <= end;

        let reason = if current_points < MIN_POINTS {
            Some(format!(
                "Minimum {} points required. Current: {}P",
                MIN_POINTS, current_points
            ))
        } else if !has_sbt {
            Some("SBT (User Pass) required. Please claim your User Pass first.".to_string())
        } else if !is_within_mvp_period {
            Some(format!("MVP period ended ({})", end.to_rfc3339()))
        } else if total_claimed_xlt >= MAX_TOTAL_SUPPLY {
            Some(format!(
                "XLT maximum supply reached ({} XLT)",
                MAX_TOTAL_SUPPLY
            ))
        } else {
            None
        };

        Self {
            eligible: reason.is_none(),
            reason,
            current_points,
            has_sbt,
            total_claimed_xlt,
            is_within_mvp_period,
        }
    }

    pub fn remaining_xlt(&self) -> f64 {
        MAX_TOTAL_SUPPLY - self.total_claimed_xlt
    }
}

impl From<entity::xlt_claim_request::Model> for ClaimDto {
    fn from(claim: entity::xlt_claim_request::Model) -> Self {
        Self {
            id: claim.id,
            points_claimed: claim.points_claimed,
            xlt_amount: claim.xlt_amount,
            wallet_address: claim.wallet_address,
            status: claim.status,
            memo: claim.memo,
            rejection_reason: claim.rejection_reason,
            approved_at: claim.approved_at,
            completed_at: claim.completed_at,
            created_at: claim.created_at,
        }
    }
}
