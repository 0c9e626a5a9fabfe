use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        referral::{
            MyReferralsDto, MyReferrerDto, ReferralDto, ReferralLinkDto, ReferralStatsDto,
            RegisterReferralDto, ShareUrlDto, ShareUrlQuery,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::referral::ReferralService,
        state::AppState,
    },
};

pub static REFERRAL_TAG: &str = "referral";

#[utoipa::path(
    post,
    path = "/api/v1/referrals/register",
    tag = REFERRAL_TAG,
    request_body = RegisterReferralDto,
    responses(
        (status = 201, description = "Referral recorded", body = ReferralDto),
        (status = 400, description = "Malformed or own code, or a referrer already exists", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid referral code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let referral = ReferralService::new(&state.db)
        .register(user.id, &payload.referral_code)
        .await?;

    Ok((StatusCode::CREATED, Json(referral)))
}

#[utoipa::path(
    get,
    path = "/api/v1/referrals/my-referrals",
    tag = REFERRAL_TAG,
    responses(
        (status = 200, description = "Users referred by the caller", body = MyReferralsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_referrals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let referrals = ReferralService::new(&state.db)
        .get_my_referrals(user.id)
        .await?;

    Ok((StatusCode::OK, Json(referrals)))
}

#[utoipa::path(
    get,
    path = "/api/v1/referrals/my-referrer",
    tag = REFERRAL_TAG,
    responses(
        (status = 200, description = "The caller's referrer, null when there is none", body = Option<MyReferrerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_referrer(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let referrer = ReferralService::new(&state.db)
        .get_my_referrer(user.id)
        .await?;

    Ok((StatusCode::OK, Json(referrer)))
}

#[utoipa::path(
    get,
    path = "/api/v1/referrals/stats",
    tag = REFERRAL_TAG,
    responses(
        (status = 200, description = "Referral progress counts", body = ReferralStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = ReferralService::new(&state.db).get_stats(user.id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/v1/referrals/my-link",
    tag = REFERRAL_TAG,
    responses(
        (status = 200, description = "Referral link, QR code and share text", body = ReferralLinkDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_link(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let link = ReferralService::new(&state.db)
        .get_my_link(user.id, &state.config.frontend_url)
        .await?;

    Ok((StatusCode::OK, Json(link)))
}

#[utoipa::path(
    get,
    path = "/api/v1/referrals/x-share-url",
    tag = REFERRAL_TAG,
    params(ShareUrlQuery),
    responses(
        (status = 200, description = "Twitter intent URL", body = ShareUrlDto),
        (status = 400, description = "Unknown share type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_share_url(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ShareUrlQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let share = ReferralService::new(&state.db)
        .get_share_url(
            user.id,
            query.share_type.as_deref(),
            &state.config.frontend_url,
        )
        .await?;

    Ok((StatusCode::OK, Json(share)))
}
