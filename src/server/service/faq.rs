//! Localized FAQ listing and admin management.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::SuccessDto,
        faq::{CreateFaqDto, FaqDto, FaqListDto, FaqListQuery, FaqMutationDto, FaqRecordDto, UpdateFaqDto},
    },
    server::{
        data::faq::FaqRepository,
        error::AppError,
        model::faq::{CreateFaqParam, FaqQuery, Lang, UpdateFaqParam},
    },
};

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;

pub struct FaqService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Published FAQs in the requested language.
    ///
    /// # Returns
    /// - `Ok(FaqListDto)` - One page of FAQs and the filtered total
    /// - `Err(AppError::BadRequest)` - Unknown language or limit out of range
    pub async fn list(&self, query: FaqListQuery) -> Result<FaqListDto, AppError> {
        let lang = Lang::from_api(query.lang.as_deref())?;
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "Limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        let offset = query.offset.unwrap_or(0);

        let (faqs, total) = FaqRepository::new(self.db)
            .get_published(&FaqQuery {
                lang,
                search: query.search.filter(|s| !s.trim().is_empty()),
                category: query.category,
                limit,
                offset,
            })
            .await?;

        Ok(FaqListDto {
            faqs: faqs.iter().map(|faq| localized(faq, lang)).collect(),
            total,
            limit,
            offset,
        })
    }

    /// A published FAQ. Each read counts as a view.
    pub async fn get(&self, id: i32, lang: Option<&str>) -> Result<FaqDto, AppError> {
        let lang = Lang::from_api(lang)?;
        let repo = FaqRepository::new(self.db);

        let faq = repo
            .find_published(id)
            .await?
            .ok_or_else(|| AppError::NotFound("FAQ not found".to_string()))?;
        repo.increment_views(id).await?;

        Ok(localized(&faq, lang))
    }

    pub async fn get_categories(&self) -> Result<Vec<String>, AppError> {
        Ok(FaqRepository::new(self.db).get_categories().await?)
    }

    pub async fn create(&self, dto: CreateFaqDto) -> Result<FaqMutationDto, AppError> {
        let faq = FaqRepository::new(self.db)
            .create(CreateFaqParam {
                question_ko: dto.question_ko,
                question_en: dto.question_en,
                answer_ko: dto.answer_ko,
                answer_en: dto.answer_en,
                category: dto.category,
                order_index: dto.order_index,
                is_published: dto.is_published,
                is_pinned: dto.is_pinned,
            })
            .await?;

        tracing::info!("Created FAQ {}", faq.id);

        Ok(FaqMutationDto {
            success: true,
            message: "FAQ created successfully".to_string(),
            faq: faq.into(),
        })
    }

    pub async fn update(&self, id: i32, dto: UpdateFaqDto) -> Result<FaqMutationDto, AppError> {
        let faq = FaqRepository::new(self.db)
            .update(
                id,
                UpdateFaqParam {
                    question_ko: dto.question_ko,
                    question_en: dto.question_en,
                    answer_ko: dto.answer_ko,
                    answer_en: dto.answer_en,
                    category: dto.category,
                    order_index: dto.order_index,
                    is_published: dto.is_published,
                    is_pinned: dto.is_pinned,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("FAQ not found".to_string()))?;

        Ok(FaqMutationDto {
            success: true,
            message: "FAQ updated successfully".to_string(),
            faq: faq.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> Result<SuccessDto, AppError> {
        if !FaqRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("FAQ not found".to_string()));
        }

        tracing::info!("Deleted FAQ {}", id);

        Ok(SuccessDto::new("FAQ deleted successfully"))
    }
}

fn localized(faq: &entity::faq::Model, lang: Lang) -> FaqDto {
    FaqDto {
        id: faq.id,
        question: lang.question(faq).to_string(),
        answer: lang.answer(faq).to_string(),
        category: faq.category.clone(),
        is_pinned: faq.is_pinned,
        view_count: faq.view_count,
        created_at: faq.created_at,
        updated_at: faq.updated_at,
    }
}
