//! Error handling for the game server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use namecard_core::{AudioError, GameError};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Game(GameError::UnknownCard { .. }) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Game(_) => (StatusCode::BAD_REQUEST, "game_error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Audio(_) => (StatusCode::INTERNAL_SERVER_ERROR, "audio_error"),
            ApiError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
