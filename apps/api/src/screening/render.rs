//! Display helpers for the match report.

use crate::screening::matcher::MatchReport;
use crate::screening::skills::SkillSet;

/// Renders skills as a delimited literal list: `` `git`, `sql` ``.
/// Empty sets render as an empty string.
pub fn skill_list(skills: &SkillSet) -> String {
    skills
        .iter()
        .map(|s| format!("`{s}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary line: `"{matched}/{total} ({percent}%)"`.
pub fn match_summary(report: &MatchReport) -> String {
    format!(
        "{}/{} ({}%)",
        report.matched_count(),
        report.job_skill_count,
        report.display_percent()
    )
}
