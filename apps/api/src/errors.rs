use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume required")]
    ResumeRequired,

    #[error("Job description required")]
    JobDescriptionRequired,

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::ResumeRequired => (
                StatusCode::BAD_REQUEST,
                "RESUME_REQUIRED",
                "Please upload a resume to proceed.".to_string(),
            ),
            AppError::JobDescriptionRequired => (
                StatusCode::BAD_REQUEST,
                "JOB_DESCRIPTION_REQUIRED",
                "Please paste a job description to proceed.".to_string(),
            ),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    format!("Could not read the uploaded resume: {e}"),
                )
            }
            AppError::Classifier(e) => {
                tracing::error!("Classifier error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLASSIFIER_ERROR",
                    "Resume classification failed".to_string(),
                )
            }
            AppError::Multipart(e) => (
                e.status(),
                "MULTIPART_ERROR",
                format!("Invalid upload: {}", e.body_text()),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
