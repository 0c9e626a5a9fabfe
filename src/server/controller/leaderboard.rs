use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        leaderboard::{
            LeaderboardPageDto, LeaderboardQuery, LeaderboardStatsDto, PeriodQuery, Top3Dto,
            UserRankDto,
        },
    },
    server::{error::AppError, service::leaderboard::LeaderboardService, state::AppState},
};

pub static LEADERBOARD_TAG: &str = "leaderboard";

#[utoipa::path(
    get,
    path = "/api/v1/leaderboard",
    tag = LEADERBOARD_TAG,
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "One page of the latest snapshot", body = LeaderboardPageDto),
        (status = 400, description = "Invalid period, category, sort or limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = LeaderboardService::new(&state.db)
        .get_leaderboard(query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/leaderboard/user/{user_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Best rank of the user, null when unranked", body = Option<UserRankDto>),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_rank(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rank = LeaderboardService::new(&state.db)
        .get_user_rank(user_id, query.period.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(rank)))
}

#[utoipa::path(
    get,
    path = "/api/v1/leaderboard/top3",
    tag = LEADERBOARD_TAG,
    params(PeriodQuery),
    responses(
        (status = 200, description = "The three best ranks with channel links", body = Top3Dto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top3(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let top3 = LeaderboardService::new(&state.db)
        .get_top3(query.period.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(top3)))
}

#[utoipa::path(
    get,
    path = "/api/v1/leaderboard/stats",
    tag = LEADERBOARD_TAG,
    params(PeriodQuery),
    responses(
        (status = 200, description = "Aggregates of the latest snapshot, null when there is none", body = Option<LeaderboardStatsDto>),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stats = LeaderboardService::new(&state.db)
        .get_stats(query.period.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
