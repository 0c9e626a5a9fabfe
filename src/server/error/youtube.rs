use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

/// Errors from the YouTube Data API client.
#[derive(Error, Debug)]
pub enum YoutubeError {
    /// Transport failure or non-success response from the API.
    #[error("YouTube API request failed: {0}")]
    Api(String),

    /// The API returned no item for the requested resource.
    #[error("{0}")]
    NotFound(String),

    /// No API key is configured.
    #[error("YouTube API key is not configured")]
    MissingApiKey,
}

impl From<reqwest::Error> for YoutubeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(err.to_string())
    }
}

/// - `NotFound` → 404 with the message
/// - `Api` / `MissingApiKey` → 502 Bad Gateway, details logged
impl IntoResponse for YoutubeError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            err => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Failed to reach YouTube".to_string(),
                )
            }
        }
    }
}
