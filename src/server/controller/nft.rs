use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        nft::{
            BurnNftDto, ClaimUserPassDto, IssueRewardNftDto, NftActionDto, NftBenefitsDto,
            NftCollectionDto, NftCollectionQuery, NftDto, NftTypesDto, UserPassEligibilityDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::nft::NftService,
        state::AppState,
    },
};

pub static NFT_TAG: &str = "nft";

#[utoipa::path(
    get,
    path = "/api/v1/nfts/my-collection",
    tag = NFT_TAG,
    params(NftCollectionQuery),
    responses(
        (status = 200, description = "NFTs owned by the caller", body = NftCollectionDto),
        (status = 400, description = "Unknown NFT type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_collection(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<NftCollectionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let collection = NftService::new(&state.db)
        .get_collection(user.id, query)
        .await?;

    Ok((StatusCode::OK, Json(collection)))
}

#[utoipa::path(
    get,
    path = "/api/v1/nfts/types",
    tag = NFT_TAG,
    responses(
        (status = 200, description = "NFT catalogue with the tier table", body = NftTypesDto)
    ),
)]
pub async fn get_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let types = NftService::new(&state.db).get_types();

    Ok((StatusCode::OK, Json(types)))
}

#[utoipa::path(
    get,
    path = "/api/v1/nfts/user-pass/eligibility",
    tag = NFT_TAG,
    responses(
        (status = 200, description = "Whether the caller may claim the User Pass", body = UserPassEligibilityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_pass_eligibility(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let eligibility = NftService::new(&state.db)
        .check_user_pass_eligibility(user.id)
        .await?;

    Ok((StatusCode::OK, Json(eligibility)))
}

#[utoipa::path(
    post,
    path = "/api/v1/nfts/claim-user-pass",
    tag = NFT_TAG,
    request_body = ClaimUserPassDto,
    responses(
        (status = 201, description = "User Pass minted and boost points awarded", body = NftActionDto),
        (status = 400, description = "Invalid wallet or not eligible", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_user_pass(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClaimUserPassDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let result = NftService::new(&state.db)
        .claim_user_pass(user.id, &payload.wallet_address)
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/v1/nfts/benefits",
    tag = NFT_TAG,
    responses(
        (status = 200, description = "Current tier, progress to the next and all tiers", body = NftBenefitsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_benefits(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let benefits = NftService::new(&state.db).get_benefits(user.id).await?;

    Ok((StatusCode::OK, Json(benefits)))
}

#[utoipa::path(
    post,
    path = "/api/v1/nfts/burn/{id}",
    tag = NFT_TAG,
    params(
        ("id" = i32, Path, description = "NFT ID")
    ),
    request_body = BurnNftDto,
    responses(
        (status = 200, description = "NFT burned", body = NftActionDto),
        (status = 400, description = "Already burned or not burnable", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "NFT owned by another user", body = ErrorDto),
        (status = 404, description = "NFT not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn burn(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Option<Json<BurnNftDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reason = payload.and_then(|Json(body)| body.reason);
    let result = NftService::new(&state.db).burn(user.id, id, reason).await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/api/v1/nfts/issue-reward",
    tag = NFT_TAG,
    request_body = IssueRewardNftDto,
    responses(
        (status = 201, description = "Reward NFT minted", body = NftActionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_reward(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<IssueRewardNftDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = NftService::new(&state.db).issue_reward(payload).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/v1/nfts/{id}",
    tag = NFT_TAG,
    params(
        ("id" = i32, Path, description = "NFT ID")
    ),
    responses(
        (status = 200, description = "NFT details", body = NftDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "NFT not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nft(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let nft = NftService::new(&state.db).get_nft(user.id, id).await?;

    Ok((StatusCode::OK, Json(nft)))
}
