use crate::server::{
    data::faq::FaqRepository,
    model::faq::{CreateFaqParam, FaqQuery, Lang, UpdateFaqParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_categories;
mod get_published;
mod increment_views;

fn query(lang: Lang, search: Option<&str>) -> FaqQuery {
    FaqQuery {
        lang,
        search: search.map(str::to_string),
        category: None,
        limit: 20,
        offset: 0,
    }
}
