use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::lenses::generator::{GenerationFailure, GENERATION_FAILURE_MESSAGE};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A generation is already in progress")]
    GenerationInProgress,

    #[error("Generation failure: {0}")]
    Generation(#[from] GenerationFailure),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::GenerationInProgress => (
                StatusCode::CONFLICT,
                "GENERATION_IN_PROGRESS",
                "A generation is already running. Wait for it to finish.".to_string(),
            ),
            AppError::Generation(e) => {
                tracing::error!("Generation failure: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILURE",
                    GENERATION_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::GenerationInProgress, StatusCode::CONFLICT),
            (
                AppError::Generation(GenerationFailure::EmptyResponse),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_generation_failures_share_one_message() {
        let failure = GenerationFailure::Invalid("blank headline for lens(es): source".into());
        let err = AppError::from(failure);
        assert!(err.to_string().contains("blank headline"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
