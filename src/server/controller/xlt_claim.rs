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
        xlt_claim::{
            ClaimEligibilityDto, ClaimListDto, ClaimListQuery, ClaimRequestedDto, ClaimStatsDto,
            RequestClaimDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::xlt_claim::XltClaimService,
        state::AppState,
    },
};

pub static XLT_CLAIM_TAG: &str = "xlt-claim";

#[utoipa::path(
    get,
    path = "/api/v1/xlt-claim/eligibility",
    tag = XLT_CLAIM_TAG,
    responses(
        (status = 200, description = "Claim eligibility with the reason when not eligible", body = ClaimEligibilityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_eligibility(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let eligibility = XltClaimService::new(&state.db)
        .check_eligibility(user.id)
        .await?;

    Ok((StatusCode::OK, Json(eligibility)))
}

#[utoipa::path(
    post,
    path = "/api/v1/xlt-claim/request",
    tag = XLT_CLAIM_TAG,
    request_body = RequestClaimDto,
    responses(
        (status = 201, description = "Claim request stored as pending", body = ClaimRequestedDto),
        (status = 400, description = "Not eligible or invalid amount", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RequestClaimDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let claim = XltClaimService::new(&state.db)
        .request(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(claim)))
}

#[utoipa::path(
    get,
    path = "/api/v1/xlt-claim/my-claims",
    tag = XLT_CLAIM_TAG,
    params(ClaimListQuery),
    responses(
        (status = 200, description = "The caller's claim requests, newest first", body = ClaimListDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_claims(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ClaimListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let claims = XltClaimService::new(&state.db)
        .get_my_claims(user.id, query)
        .await?;

    Ok((StatusCode::OK, Json(claims)))
}

#[utoipa::path(
    get,
    path = "/api/v1/xlt-claim/stats",
    tag = XLT_CLAIM_TAG,
    responses(
        (status = 200, description = "Global claim totals", body = ClaimStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = XltClaimService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
