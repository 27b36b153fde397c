//! Skill vocabulary — the curated, ordered list of skills the extractor looks for.
//!
//! Built once at start-up (built-in table or `SKILLS_PATH` override) and never
//! mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Curated skill table, grouped loosely by field. Order is display order only.
const DEFAULT_SKILLS: &[&str] = &[
    // Software & data
    "python",
    "java",
    "c++",
    "sql",
    "excel",
    "machine learning",
    "deep learning",
    "nlp",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "keras",
    "django",
    "flask",
    "aws",
    "azure",
    "git",
    "docker",
    "redis",
    "linux",
    "javascript",
    "html",
    "css",
    "react",
    "node.js",
    "mongodb",
    "spark",
    "hadoop",
    "tableau",
    // Finance
    "accounting",
    "financial analysis",
    "budgeting",
    "forecasting",
    "auditing",
    "taxation",
    "payroll",
    "investment",
    "risk management",
    "financial modeling",
    "sap",
    "quickbooks",
    "erp",
    "cost accounting",
    "banking",
    "capital markets",
    "equity research",
    "valuation",
    "treasury",
    "compliance",
    // HR
    "recruitment",
    "talent acquisition",
    "onboarding",
    "employee relations",
    "performance management",
    "training",
    "hr policies",
    "payroll management",
    "benefits administration",
    "hr analytics",
    "labor law",
    "conflict resolution",
    "succession planning",
    "organizational development",
    // Mechanical
    "autocad",
    "solidworks",
    "catia",
    "ansys",
    "mechanical design",
    "manufacturing",
    "maintenance",
    "thermodynamics",
    "fluid mechanics",
    "hvac",
    "mechatronics",
    "cad",
    "cam",
    "fea",
    "plc",
    // Civil
    "structural analysis",
    "staad pro",
    "etabs",
    "autocad civil",
    "construction management",
    "surveying",
    "quantity estimation",
    "project management",
    "geotechnical engineering",
    "transportation engineering",
    "primavera",
    "ms project",
    "site supervision",
    "bim",
    // General
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "project planning",
    "presentation",
    "negotiation",
    "customer service",
    "sales",
    "marketing",
    "data entry",
    "supply chain",
    "logistics",
];

/// Ordered, duplicate-free list of lowercase skill strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// The curated built-in table.
    pub fn builtin() -> Self {
        Self::from_entries(DEFAULT_SKILLS.iter().copied())
    }

    /// Builds a vocabulary from arbitrary entries: trims, lowercases, drops blanks
    /// and keeps the first occurrence of each duplicate.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self { skills }
    }

    /// Parses a vocabulary file: one skill per line, `#` starts a comment line.
    pub fn parse(contents: &str) -> Self {
        Self::from_entries(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Loads a vocabulary override from disk. An empty result is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary '{}'", path.display()))?;
        let vocabulary = Self::parse(&contents);
        if vocabulary.is_empty() {
            bail!("Skill vocabulary '{}' contains no skills", path.display());
        }
        Ok(vocabulary)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
