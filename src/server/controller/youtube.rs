use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        youtube::{ChannelDto, RegisterChannelDto, VerifyChannelDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{job::crawl::CrawlService, referral::ReferralService, youtube::YoutubeService},
        state::AppState,
        youtube::client::YoutubeClient,
    },
};

pub static YOUTUBE_TAG: &str = "youtube";

#[utoipa::path(
    post,
    path = "/api/v1/youtube/channels",
    tag = YOUTUBE_TAG,
    request_body = RegisterChannelDto,
    responses(
        (status = 201, description = "Channel registered, verification code issued", body = ChannelDto),
        (status = 400, description = "Missing or unresolvable channel identifier", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "YouTube channel not found", body = ErrorDto),
        (status = 409, description = "Channel already verified or pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_channel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channel = YoutubeService::new(&state.db, &state.youtube)
        .register_channel(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(channel)))
}

/// Verifies ownership, then crawls the channel and re-checks the user's
/// referral in the background.
#[utoipa::path(
    post,
    path = "/api/v1/youtube/channels/verify",
    tag = YOUTUBE_TAG,
    request_body = VerifyChannelDto,
    responses(
        (status = 200, description = "Channel verified", body = ChannelDto),
        (status = 400, description = "Already verified or code not in the description", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_channel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channel = YoutubeService::new(&state.db, &state.youtube)
        .verify_channel(user.id, payload.channel_db_id)
        .await?;

    let db = state.db.clone();
    let youtube = state.youtube.clone();
    let channel_id = channel.channel_id.clone();
    tokio::spawn(async move {
        crawl_after_verification(db, youtube, channel_id, user.id).await;
    });

    Ok((StatusCode::OK, Json(channel)))
}

async fn crawl_after_verification(
    db: DatabaseConnection,
    youtube: YoutubeClient,
    channel_id: String,
    user_id: i32,
) {
    match CrawlService::new(&db, &youtube).run(Some(&channel_id)).await {
        Ok(summary) => tracing::info!(
            "Initial crawl of channel {} stored {} video(s)",
            channel_id,
            summary.videos
        ),
        Err(e) => tracing::error!("Initial crawl of channel {} failed: {}", channel_id, e),
    }

    if let Err(e) = ReferralService::new(&db).check_referee(user_id).await {
        tracing::error!("Failed to check referral of user {}: {}", user_id, e);
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/youtube/channels/{id}",
    tag = YOUTUBE_TAG,
    params(
        ("id" = i32, Path, description = "Channel row ID")
    ),
    responses(
        (status = 200, description = "Channel details", body = ChannelDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let channel = YoutubeService::new(&state.db, &state.youtube)
        .get_channel(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(channel)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/youtube/channels/{id}",
    tag = YOUTUBE_TAG,
    params(
        ("id" = i32, Path, description = "Channel row ID")
    ),
    responses(
        (status = 200, description = "Channel deleted", body = SuccessDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_channel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let result = YoutubeService::new(&state.db, &state.youtube)
        .delete_channel(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
