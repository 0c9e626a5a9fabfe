use chrono::NaiveDate;
use crate::server::{
    data::point::{PointRepository, TransactionFilter},
    model::point::{AwardPointsParam, PointCategory},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_to_history;
mod add_to_summary;
mod get_transactions;
