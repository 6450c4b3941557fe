//! Bowling score tracker: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bowling_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

use crate::notation::NotationError;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error raised by the scoring context.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Roll notation that could not be translated into pins.
    #[error("invalid roll notation: {0}")]
    Notation(#[from] NotationError),

    /// A request body that is well-formed JSON but not a valid request.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Domain(err) => match err {
                DomainError::GameNotFound(_) => (StatusCode::NOT_FOUND, "game_not_found"),
                DomainError::InvalidPlayerIndex { .. } => {
                    (StatusCode::NOT_FOUND, "player_not_found")
                }
                DomainError::UnsupportedGameType(_) => {
                    (StatusCode::BAD_REQUEST, "unsupported_game_type")
                }
                DomainError::GameIdConflict(_) => (StatusCode::CONFLICT, "game_id_conflict"),
                DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                DomainError::Infrastructure(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
                }
            },
            Self::Notation(_) | Self::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
