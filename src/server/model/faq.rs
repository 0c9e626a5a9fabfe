//! FAQ language selection and admin parameters.

use crate::{model::faq::FaqRecordDto, server::error::AppError};

pub const DEFAULT_CATEGORY: &str = "General";

/// Language an FAQ is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Ko,
    En,
}

impl Lang {
    pub fn from_api(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None | Some("ko") => Ok(Self::Ko),
            Some("en") => Ok(Self::En),
            Some(_) => Err(AppError::BadRequest(
                "Language must be either \"ko\" or \"en\"".to_string(),
            )),
        }
    }

    pub fn question<'a>(&self, faq: &'a entity::faq::Model) -> &'a str {
        match self {
            Self::Ko => &faq.question_ko,
            Self::En => &faq.question_en,
        }
    }

    pub fn answer<'a>(&self, faq: &'a entity::faq::Model) -> &'a str {
        match self {
            Self::Ko => &faq.answer_ko,
            Self::En => &faq.answer_en,
        }
    }
}

/// Filters for the public FAQ list.
#[derive(Debug, Clone, Default)]
pub struct FaqQuery {
    pub lang: Lang,
    /// Whitespace-separated terms; every term must match.
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl FaqQuery {
    pub fn terms(&self) -> Vec<String> {
        self.search
            .as_deref()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct CreateFaqParam {
    pub question_ko: String,
    pub question_en: String,
    pub answer_ko: String,
    pub answer_en: String,
    pub category: Option<String>,
    pub order_index: Option<i32>,
    pub is_published: Option<bool>,
    pub is_pinned: Option<bool>,
}

/// Partial update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateFaqParam {
    pub question_ko: Option<String>,
    pub question_en: Option<String>,
    pub answer_ko: Option<String>,
    pub answer_en: Option<String>,
    pub category: Option<String>,
    pub order_index: Option<i32>,
    pub is_published: Option<bool>,
    pub is_pinned: Option<bool>,
}

impl From<entity::faq::Model> for FaqRecordDto {
    fn from(faq: entity::faq::Model) -> Self {
        Self {
            id: faq.id,
            question_ko: faq.question_ko,
            question_en: faq.question_en,
            answer_ko: faq.answer_ko,
            answer_en: faq.answer_en,
            category: faq.category,
            order_index: faq.order_index,
            is_published: faq.is_published,
            is_pinned: faq.is_pinned,
            view_count: faq.view_count,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }
}
