//! Matcher — compares the job description's skills against the resume's.

use serde::{Deserialize, Serialize};

use crate::screening::skills::SkillSet;

/// Result of comparing two skill sets. Recomputed per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Job-description skills also present in the resume.
    pub matched: SkillSet,
    /// Job-description skills absent from the resume.
    pub missing: SkillSet,
    /// Number of skills found in the job description.
    pub job_skill_count: usize,
    /// 100 × |matched| / |job skills|, or 0 when the job description has no skills.
    pub match_percent: f64,
}

impl MatchReport {
    /// Percentage rounded for display. Ties go to the even integer (12.5 → 12).
    pub fn display_percent(&self) -> u32 {
        self.match_percent.round_ties_even() as u32
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

/// Computes matched/missing skills and the match percentage.
pub fn match_skills(job_skills: &SkillSet, resume_skills: &SkillSet) -> MatchReport {
    let matched: SkillSet = job_skills.intersection(resume_skills).cloned().collect();
    let missing: SkillSet = job_skills.difference(resume_skills).cloned().collect();

    let match_percent = if job_skills.is_empty() {
        0.0
    } else {
        100.0 * matched.len() as f64 / job_skills.len() as f64
    };

    MatchReport {
        matched,
        missing,
        job_skill_count: job_skills.len(),
        match_percent,
    }
}
