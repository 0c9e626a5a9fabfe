use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FaqListQuery {
    /// `ko` or `en`. Defaults to `ko`.
    pub lang: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    /// 1 to 100. Defaults to 20.
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FaqLangQuery {
    pub lang: Option<String>,
}

/// An FAQ rendered in one language.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_pinned: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqListDto {
    pub faqs: Vec<FaqDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Both languages of an FAQ, as managed by admins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqRecordDto {
    pub id: i32,
    pub question_ko: String,
    pub question_en: String,
    pub answer_ko: String,
    pub answer_en: String,
    pub category: String,
    pub order_index: i32,
    pub is_published: bool,
    pub is_pinned: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqMutationDto {
    pub success: bool,
    pub message: String,
    pub faq: FaqRecordDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFaqDto {
    pub question_ko: String,
    pub question_en: String,
    pub answer_ko: String,
    pub answer_en: String,
    pub category: Option<String>,
    pub order_index: Option<i32>,
    pub is_published: Option<bool>,
    pub is_pinned: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFaqDto {
    pub question_ko: Option<String>,
    pub question_en: Option<String>,
    pub answer_ko: Option<String>,
    pub answer_en: Option<String>,
    pub category: Option<String>,
    pub order_index: Option<i32>,
    pub is_published: Option<bool>,
    pub is_pinned: Option<bool>,
}
