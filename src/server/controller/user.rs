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
        user::{
            ActivityStatsDto, ActivityStatsQuery, ConnectWalletDto, SocialAccountsDto,
            UpdateProfileDto, UserProfileDto,
        },
        youtube::ChannelDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the logged in user", body = UserProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db).get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileDto),
        (status = 400, description = "Invalid wallet address or email", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .update_profile(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/me/wallet",
    tag = USER_TAG,
    request_body = ConnectWalletDto,
    responses(
        (status = 200, description = "Wallet connected", body = UserProfileDto),
        (status = 400, description = "Invalid address or owned by another user", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn connect_wallet(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ConnectWalletDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .connect_wallet(user.id, payload.wallet_address)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/channels",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Registered channels, newest first", body = Vec<ChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_channels(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channels = UserService::new(&state.db).get_channels(user.id).await?;

    Ok((StatusCode::OK, Json(channels)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/social-accounts",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Link state per platform", body = SocialAccountsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_social_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let accounts = UserService::new(&state.db)
        .get_social_accounts(user.id)
        .await?;

    Ok((StatusCode::OK, Json(accounts)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/activity-stats",
    tag = USER_TAG,
    params(ActivityStatsQuery),
    responses(
        (status = 200, description = "Engagement totals for the period", body = ActivityStatsDto),
        (status = 400, description = "Unknown period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_activity_stats(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ActivityStatsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = UserService::new(&state.db)
        .get_activity_stats(user.id, query.period.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Public profile", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(id).await?;

    Ok((StatusCode::OK, Json(profile)))
}
