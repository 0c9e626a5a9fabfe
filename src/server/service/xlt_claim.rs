//! XLT token claim requests for the MVP period.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::xlt_claim::{
        ClaimDto, ClaimEligibilityDto, ClaimListDto, ClaimListQuery, ClaimRequestedDto,
        ClaimStatsDto, RequestClaimDto,
    },
    server::{
        data::{
            nft::NftRepository,
            point::PointRepository,
            xlt_claim::{CreateClaimParam, XltClaimRepository},
        },
        error::AppError,
        model::{
            nft::NftType,
            xlt_claim::{
                mvp_end, xlt_for_points, ClaimEligibility, ClaimStatus, EXCHANGE_RATE,
                MAX_TOTAL_SUPPLY, MIN_POINTS,
            },
        },
        util::validate::require_wallet_address,
    },
};

const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

pub struct XltClaimService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> XltClaimService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn evaluate(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<ClaimEligibility, AppError> {
        let current_points = PointRepository::new(self.db)
            .find_summary(user_id)
            .await?
            .map(|s| s.total_points)
            .unwrap_or(0);
        let has_sbt = NftRepository::new(self.db)
            .find_active(user_id, NftType::Sbt, None)
            .await?
            .is_some();
        let total_claimed_xlt = XltClaimRepository::new(self.db)
            .sum_xlt(&ClaimStatus::allocated())
            .await?;

        Ok(ClaimEligibility::evaluate(
            current_points,
            has_sbt,
            total_claimed_xlt,
            now,
        ))
    }

    pub async fn check_eligibility(&self, user_id: i32) -> Result<ClaimEligibilityDto, AppError> {
        self.check_eligibility_at(user_id, Utc::now()).await
    }

    /// Eligibility as of `now`.
    pub async fn check_eligibility_at(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<ClaimEligibilityDto, AppError> {
        let eligibility = self.evaluate(user_id, now).await?;

        Ok(ClaimEligibilityDto {
            eligible: eligibility.eligible,
            reason: eligibility.reason,
            min_points: MIN_POINTS,
            current_points: eligibility.current_points,
            has_sbt: eligibility.has_sbt,
            total_claimed_xlt: eligibility.total_claimed_xlt,
            max_total_xlt: MAX_TOTAL_SUPPLY,
            is_within_mvp_period: eligibility.is_within_mvp_period,
        })
    }

    pub async fn request(
        &self,
        user_id: i32,
        dto: RequestClaimDto,
    ) -> Result<ClaimRequestedDto, AppError> {
        self.request_at(user_id, dto, Utc::now()).await
    }

    /// Files a PENDING claim converting `points` into XLT, judged as of `now`.
    ///
    /// Points are not deducted here; they are settled when the claim is
    /// approved.
    ///
    /// # Returns
    /// - `Ok(ClaimRequestedDto)` - The stored request
    /// - `Err(AppError::BadRequest)` - Not eligible, more points than held,
    ///   more XLT than remains, or a malformed wallet address
    pub async fn request_at(
        &self,
        user_id: i32,
        dto: RequestClaimDto,
        now: DateTime<Utc>,
    ) -> Result<ClaimRequestedDto, AppError> {
        if dto.points <= 0 {
            return Err(AppError::BadRequest(
                "Points must be a positive number".to_string(),
            ));
        }
        if let Some(wallet) = &dto.wallet_address {
            require_wallet_address(wallet)?;
        }

        let eligibility = self.evaluate(user_id, now).await?;
        if let Some(reason) = eligibility.reason.clone() {
            return Err(AppError::BadRequest(reason));
        }

        if dto.points > eligibility.current_points {
            return Err(AppError::BadRequest(format!(
                "Insufficient points. Available: {}P, Requested: {}P",
                eligibility.current_points, dto.points
            )));
        }

        let xlt_amount = xlt_for_points(dto.points);
        let remaining = eligibility.remaining_xlt();
        if xlt_amount > remaining {
            return Err(AppError::BadRequest(format!(
                "Insufficient XLT supply. Available: {} XLT, Requested: {} XLT",
                remaining, xlt_amount
            )));
        }

        let claim = XltClaimRepository::new(self.db)
            .create(CreateClaimParam {
                user_id,
                points_claimed: dto.points,
                xlt_amount,
                wallet_address: dto.wallet_address,
                memo: dto.memo,
            })
            .await?;

        tracing::info!(
            "User {} requested {} XLT for {}P (claim {})",
            user_id,
            claim.xlt_amount,
            claim.points_claimed,
            claim.id
        );

        Ok(ClaimRequestedDto {
            success: true,
            message: "XLT Claim request submitted successfully".to_string(),
            claim_id: claim.id,
            points_claimed: claim.points_claimed,
            xlt_amount: claim.xlt_amount,
            status: claim.status,
            note: "XLT will be distributed after MVP period ends (2026.06.30)".to_string(),
        })
    }

    pub async fn get_my_claims(
        &self,
        user_id: i32,
        query: ClaimListQuery,
    ) -> Result<ClaimListDto, AppError> {
        let status = query
            .status
            .as_deref()
            .map(ClaimStatus::from_str)
            .transpose()
            .map_err(AppError::BadRequest)?;
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let (claims, total) = XltClaimRepository::new(self.db)
            .get_by_user(user_id, status, page, limit)
            .await?;

        Ok(ClaimListDto {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
            claims: claims.into_iter().map(ClaimDto::from).collect(),
        })
    }

    pub async fn get_stats(&self) -> Result<ClaimStatsDto, AppError> {
        let repo = XltClaimRepository::new(self.db);
        let total_requests = repo.count_all().await?;
        let total_xlt_claimed = repo.sum_xlt(&ClaimStatus::allocated()).await?;

        let progress = total_xlt_claimed / MAX_TOTAL_SUPPLY * 100.0;

        Ok(ClaimStatsDto {
            total_requests,
            total_xlt_claimed,
            max_total_xlt: MAX_TOTAL_SUPPLY,
            remaining_xlt: MAX_TOTAL_SUPPLY - total_xlt_claimed,
            progress_percentage: (progress * 100.0).round() / 100.0,
            mvp_end_date: mvp_end().to_rfc3339_opts(SecondsFormat::Millis, true),
            exchange_rate: EXCHANGE_RATE,
        })
    }
}
