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
        event::{EventParticipantsDto, ParticipateEventDto, ParticipationDto, ParticipationQuery},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

#[utoipa::path(
    post,
    path = "/api/v1/events/participate",
    tag = EVENT_TAG,
    request_body = ParticipateEventDto,
    responses(
        (status = 201, description = "Participation recorded", body = ParticipationDto),
        (status = 400, description = "Unknown type, duplicate entry or not enough points to vote", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn participate(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ParticipateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participation = EventService::new(&state.db)
        .participate(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(participation)))
}

#[utoipa::path(
    get,
    path = "/api/v1/events/my-participations",
    tag = EVENT_TAG,
    params(ParticipationQuery),
    responses(
        (status = 200, description = "The caller's participations, newest first", body = Vec<ParticipationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_participations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ParticipationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participations = EventService::new(&state.db)
        .get_my_participations(user.id, query.event_type.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(participations)))
}

#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}/participants",
    tag = EVENT_TAG,
    params(
        ("event_id" = String, Path, description = "Event identifier")
    ),
    responses(
        (status = 200, description = "Participants with their vote weight total", body = EventParticipantsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let participants = EventService::new(&state.db)
        .get_participants(&event_id)
        .await?;

    Ok((StatusCode::OK, Json(participants)))
}
