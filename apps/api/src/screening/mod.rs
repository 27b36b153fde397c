// Resume screening pipeline
// normalize → classify the resume; extract → match → highlight the skills.
// Everything here except the classifier call is pure and infallible.

pub mod handlers;
pub mod highlight;
pub mod matcher;
pub mod normalizer;
pub mod render;
pub mod skills;
pub mod vocabulary;

use serde::Serialize;
use tracing::debug;

use crate::classifier::{CategoryClassifier, CategoryPrediction, ClassifierError};
use crate::screening::highlight::highlight;
use crate::screening::matcher::{match_skills, MatchReport};
use crate::screening::normalizer::normalize;
use crate::screening::skills::extract_skills;
use crate::screening::vocabulary::SkillVocabulary;

/// Read-only state built once at start-up and shared by every request.
#[derive(Clone)]
pub struct ScreeningContext {
    pub vocabulary: SkillVocabulary,
    pub classifier: CategoryClassifier,
}

/// Everything produced for one job description / resume pair.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub prediction: CategoryPrediction,
    pub report: MatchReport,
    pub highlighted_job_description: String,
    pub highlighted_resume: String,
}

/// What to do with a request, decided before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triage {
    Run,
    ResumeRequired,
    JobDescriptionRequired,
    Idle,
}

/// Blank (whitespace-only) job descriptions count as missing.
pub fn triage(job_description: &str, resume_present: bool) -> Triage {
    let jd_present = !job_description.trim().is_empty();
    match (jd_present, resume_present) {
        (true, true) => Triage::Run,
        (true, false) => Triage::ResumeRequired,
        (false, true) => Triage::JobDescriptionRequired,
        (false, false) => Triage::Idle,
    }
}

/// Runs the full pipeline on already-extracted resume text.
pub fn screen(
    ctx: &ScreeningContext,
    job_description: &str,
    resume_text: &str,
) -> Result<ScreeningReport, ClassifierError> {
    let cleaned = normalize(resume_text);
    let prediction = ctx.classifier.predict(&cleaned)?;

    let job_skills = extract_skills(job_description, &ctx.vocabulary);
    let resume_skills = extract_skills(resume_text, &ctx.vocabulary);
    let report = match_skills(&job_skills, &resume_skills);

    debug!(
        category = %prediction.label,
        matched = report.matched_count(),
        job_skills = report.job_skill_count,
        percent = report.match_percent,
        "Resume screened"
    );

    // Both texts are lowercased so the (lowercase) vocabulary entries are found.
    let highlighted_job_description = highlight(&job_description.to_lowercase(), &report.matched);
    let highlighted_resume = highlight(&resume_text.to_lowercase(), &report.matched);

    Ok(ScreeningReport {
        prediction,
        report,
        highlighted_job_description,
        highlighted_resume,
    })
}
