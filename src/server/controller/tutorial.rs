use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        tutorial::{CompleteTutorialDto, TutorialCardsDto, TutorialStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::tutorial::{TutorialAction, TutorialService},
        state::AppState,
    },
};

pub static TUTORIAL_TAG: &str = "tutorial";

#[utoipa::path(
    get,
    path = "/api/v1/tutorial/cards",
    tag = TUTORIAL_TAG,
    responses(
        (status = 200, description = "Onboarding cards", body = TutorialCardsDto)
    ),
)]
pub async fn get_cards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cards = TutorialService::new(&state.db).get_cards();

    Ok((StatusCode::OK, Json(cards)))
}

#[utoipa::path(
    post,
    path = "/api/v1/tutorial/complete",
    tag = TUTORIAL_TAG,
    request_body = CompleteTutorialDto,
    responses(
        (status = 200, description = "Tutorial state stored", body = SuccessDto),
        (status = 400, description = "Action is neither complete nor skip", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CompleteTutorialDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let action = TutorialAction::parse(&payload.action)?;
    let result = TutorialService::new(&state.db)
        .complete(user.id, action)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tutorial/status",
    tag = TUTORIAL_TAG,
    responses(
        (status = 200, description = "Tutorial completion state", body = TutorialStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = TutorialService::new(&state.db).get_status(user.id).await?;

    Ok((StatusCode::OK, Json(status)))
}
