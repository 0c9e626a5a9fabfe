use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{
            RecoverAccountDto, SendCodeDto, SendCodeResponseDto, VerifyCodeDto,
            VerifyCodeResponseDto,
        },
        user::UserProfileDto,
    },
    server::{
        data::email_code::RequestMeta,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(UserProfileDto::from(user))))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = SuccessDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(SuccessDto::new("Logged out successfully"))))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/email/send-code",
    tag = AUTH_TAG,
    request_body = SendCodeDto,
    responses(
        (status = 200, description = "Recovery code sent", body = SendCodeResponseDto),
        (status = 404, description = "No account with this email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.config)
        .send_code(&payload.email, request_meta(&headers), &state.code_sender)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/email/verify-code",
    tag = AUTH_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Code verified", body = VerifyCodeResponseDto),
        (status = 400, description = "Invalid, expired or exhausted code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.config)
        .verify_code(&payload.email, &payload.code)
        .await?;

    AuthSession::new(&session)
        .set_recovery_id(response.verification_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Logs in the owner of a recovery code verified by this same session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/email/recover",
    tag = AUTH_TAG,
    request_body = RecoverAccountDto,
    responses(
        (status = 200, description = "Account recovered and session established", body = UserProfileDto),
        (status = 400, description = "Verification not passed by this session, stale or already used", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recover(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecoverAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let pending = AuthSession::new(&session).take_recovery_id().await?;
    if pending != Some(payload.verification_id) {
        return Err(AppError::BadRequest("Invalid verification ID".to_string()));
    }

    let user = AuthService::new(&state.db, &state.config)
        .recover(payload.verification_id)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} recovered their account by email", user.id);

    Ok((StatusCode::OK, Json(UserProfileDto::from(user))))
}

/// First `X-Forwarded-For` hop and the user agent, when present.
fn request_meta(headers: &HeaderMap) -> RequestMeta {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    RequestMeta {
        ip_address: header("x-forwarded-for")
            .and_then(|v| v.split(',').next().map(|ip| ip.trim().to_string())),
        user_agent: header("user-agent"),
    }
}
