use chrono::{DateTime, Duration, Utc};

use crate::{
    model::xlt_claim::{ClaimListQuery, RequestClaimDto},
    server::{
        error::AppError,
        model::xlt_claim::{mvp_end, MAX_TOTAL_SUPPLY},
        service::xlt_claim::XltClaimService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_my_claims;
mod get_stats;

fn during_mvp() -> DateTime<Utc> {
    mvp_end() - Duration::days(30)
}

fn claim(points: i64) -> RequestClaimDto {
    RequestClaimDto {
        points,
        wallet_address: None,
        memo: None,
    }
}
