//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::screening::normalizer::normalize;
use crate::screening::render::{match_summary, skill_list};
use crate::screening::{screen, triage, ScreeningReport, Triage};
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScreenTextRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScreeningResponse {
    pub category: String,
    pub class_id: i64,
    pub matched_count: usize,
    pub job_skill_count: usize,
    pub match_percent: f64,
    pub match_percent_display: u32,
    pub summary: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_list: String,
    pub missing_list: String,
    pub highlighted_job_description: String,
    pub highlighted_resume: String,
}

impl From<ScreeningReport> for ScreeningResponse {
    fn from(result: ScreeningReport) -> Self {
        let report = &result.report;
        Self {
            category: result.prediction.label.clone(),
            class_id: result.prediction.class_id,
            matched_count: report.matched_count(),
            job_skill_count: report.job_skill_count,
            match_percent: report.match_percent,
            match_percent_display: report.display_percent(),
            summary: match_summary(report),
            matched_skills: report.matched.iter().cloned().collect(),
            missing_skills: report.missing.iter().cloned().collect(),
            matched_list: skill_list(&report.matched),
            missing_list: skill_list(&report.missing),
            highlighted_job_description: result.highlighted_job_description,
            highlighted_resume: result.highlighted_resume,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub cleaned: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub count: usize,
    pub skills: Vec<String>,
}

/// An uploaded resume file as received from the multipart form.
struct ResumeUpload {
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screen
///
/// Multipart form with a `job_description` text field and a `resume` file field.
/// The file's declared content type selects the extractor.
pub async fn handle_screen(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut job_description = String::new();
    let mut resume: Option<ResumeUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => job_description = field.text().await?,
            RESUME_FIELD => {
                let has_file_name = field.file_name().is_some_and(|n| !n.is_empty());
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers send an empty, unnamed part when no file was chosen.
                if has_file_name || !bytes.is_empty() {
                    resume = Some(ResumeUpload {
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    let upload = match triage(&job_description, resume.is_some()) {
        Triage::Run => resume.ok_or(AppError::ResumeRequired)?,
        Triage::ResumeRequired => return Err(AppError::ResumeRequired),
        Triage::JobDescriptionRequired => return Err(AppError::JobDescriptionRequired),
        Triage::Idle => return Ok(StatusCode::NO_CONTENT.into_response()),
    };

    // Extraction and scoring are CPU-bound — keep them off the async executor.
    let ctx = state.screening.clone();
    let result = tokio::task::spawn_blocking(move || -> Result<ScreeningReport, AppError> {
        let resume_text = extract_text(&upload.bytes, upload.content_type.as_deref())?;
        Ok(screen(&ctx, &job_description, &resume_text)?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in screening: {e}")))??;

    Ok(Json(ScreeningResponse::from(result)).into_response())
}

/// POST /api/v1/screen/text
///
/// Same pipeline as `/screen` for resume text that was already extracted.
pub async fn handle_screen_text(
    State(state): State<AppState>,
    Json(request): Json<ScreenTextRequest>,
) -> Result<Response, AppError> {
    match triage(&request.job_description, !request.resume_text.is_empty()) {
        Triage::Run => {}
        Triage::ResumeRequired => return Err(AppError::ResumeRequired),
        Triage::JobDescriptionRequired => return Err(AppError::JobDescriptionRequired),
        Triage::Idle => return Ok(StatusCode::NO_CONTENT.into_response()),
    }

    let result = screen(&state.screening, &request.job_description, &request.resume_text)?;
    Ok(Json(ScreeningResponse::from(result)).into_response())
}

/// POST /api/v1/normalize
///
/// Returns the cleaned text the classifier would see.
pub async fn handle_normalize(Json(request): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        cleaned: normalize(&request.text),
    })
}

/// GET /api/v1/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    let vocabulary = &state.screening.vocabulary;
    Json(SkillsResponse {
        count: vocabulary.len(),
        skills: vocabulary.as_slice().to_vec(),
    })
}
