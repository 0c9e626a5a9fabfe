use crate::server::{
    data::xlt_claim::{CreateClaimParam, XltClaimRepository},
    model::xlt_claim::ClaimStatus,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod sum_xlt;
