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
        point::{
            DailyPointsDto, DailyPointsQuery, PointHistoryDto, PointHistoryQuery, PointSlotsDto,
            PointSummaryDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::point::PointService,
        state::AppState,
    },
};

pub static POINT_TAG: &str = "point";

#[utoipa::path(
    get,
    path = "/api/v1/points",
    tag = POINT_TAG,
    responses(
        (status = 200, description = "Point totals per slot", body = PointSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_points(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = PointService::new(&state.db).get_summary(user.id).await?;

    Ok((StatusCode::OK, Json(summary)))
}

#[utoipa::path(
    get,
    path = "/api/v1/points/history",
    tag = POINT_TAG,
    params(PointHistoryQuery),
    responses(
        (status = 200, description = "Ledger entries, newest first", body = PointHistoryDto),
        (status = 400, description = "Invalid date, category or limit", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PointHistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let history = PointService::new(&state.db)
        .get_history(user.id, query)
        .await?;

    Ok((StatusCode::OK, Json(history)))
}

#[utoipa::path(
    get,
    path = "/api/v1/points/daily",
    tag = POINT_TAG,
    params(DailyPointsQuery),
    responses(
        (status = 200, description = "Daily roll-ups, newest first", body = Vec<DailyPointsDto>),
        (status = 400, description = "Invalid number of days", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DailyPointsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let daily = PointService::new(&state.db)
        .get_daily(user.id, query.days)
        .await?;

    Ok((StatusCode::OK, Json(daily)))
}

#[utoipa::path(
    get,
    path = "/api/v1/points/by-slot",
    tag = POINT_TAG,
    responses(
        (status = 200, description = "Slot breakdown", body = PointSlotsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_by_slot(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let slots = PointService::new(&state.db).get_by_slot(user.id).await?;

    Ok((StatusCode::OK, Json(slots)))
}
