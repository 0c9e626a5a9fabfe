use crate::{
    model::faq::{CreateFaqDto, FaqListQuery, UpdateFaqDto},
    server::{error::AppError, service::faq::FaqService},
};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod manage;
