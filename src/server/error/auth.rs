use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user ID in session")]
    UserNotInSession,

    /// The session refers to a user id that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a required permission.
    #[error("User {user_id} denied access: {reason}")]
    AccessDenied { user_id: i32, reason: String },
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::AccessDenied { .. } => {
                error_response(StatusCode::FORBIDDEN, "Access denied".to_string())
            }
        }
    }
}
