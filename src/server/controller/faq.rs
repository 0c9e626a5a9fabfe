use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        faq::{
            CreateFaqDto, FaqDto, FaqLangQuery, FaqListDto, FaqListQuery, FaqMutationDto,
            UpdateFaqDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::faq::FaqService,
        state::AppState,
    },
};

pub static FAQ_TAG: &str = "faq";

#[utoipa::path(
    get,
    path = "/api/v1/faq",
    tag = FAQ_TAG,
    params(FaqListQuery),
    responses(
        (status = 200, description = "Published FAQs, pinned first", body = FaqListDto),
        (status = 400, description = "Invalid language or paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FaqListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let faqs = FaqService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(faqs)))
}

#[utoipa::path(
    get,
    path = "/api/v1/faq/categories/list",
    tag = FAQ_TAG,
    responses(
        (status = 200, description = "Distinct categories of published FAQs", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = FaqService::new(&state.db).get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/v1/faq/{id}",
    tag = FAQ_TAG,
    params(
        ("id" = i32, Path, description = "FAQ ID"),
        FaqLangQuery
    ),
    responses(
        (status = 200, description = "FAQ in the requested language", body = FaqDto),
        (status = 400, description = "Invalid language", body = ErrorDto),
        (status = 404, description = "FAQ not found or unpublished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FaqLangQuery>,
) -> Result<impl IntoResponse, AppError> {
    let faq = FaqService::new(&state.db)
        .get(id, query.lang.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(faq)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/faq",
    tag = FAQ_TAG,
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "FAQ created", body = FaqMutationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = FaqService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/faq/{id}",
    tag = FAQ_TAG,
    params(
        ("id" = i32, Path, description = "FAQ ID")
    ),
    request_body = UpdateFaqDto,
    responses(
        (status = 200, description = "FAQ updated", body = FaqMutationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = FaqService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/faq/{id}",
    tag = FAQ_TAG,
    params(
        ("id" = i32, Path, description = "FAQ ID")
    ),
    responses(
        (status = 200, description = "FAQ deleted", body = SuccessDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "FAQ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = FaqService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(result)))
}
