use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lovebrain_core::error::LoveBrainError;
use lovebrain_core::protocol::AckResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Any(#[from] anyhow::Error),
}

impl From<LoveBrainError> for AppError {
    fn from(e: LoveBrainError) -> Self {
        match e {
            LoveBrainError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Any(other.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(s) => (StatusCode::BAD_REQUEST, s),
            AppError::Unauthorized(s) => (StatusCode::UNAUTHORIZED, s),
            AppError::NotFound(s) => (StatusCode::NOT_FOUND, s),
            AppError::Any(e) => {
                tracing::error!("Internal Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = AckResponse {
            success: false,
            message,
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
