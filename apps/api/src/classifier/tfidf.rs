//! TF-IDF vectorizer over a fixed term vocabulary.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classifier::{ClassifierError, FeatureVector, Vectorizer};

/// Runs of two or more word characters.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Lowercased term counts weighted by idf, then L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self, ClassifierError> {
        if idf.is_empty() {
            return Err(ClassifierError::InvalidModel("idf table is empty".to_string()));
        }
        if let Some((term, column)) = vocabulary.iter().find(|(_, column)| **column >= idf.len()) {
            return Err(ClassifierError::InvalidModel(format!(
                "term '{term}' maps to column {column}, idf has {} entries",
                idf.len()
            )));
        }
        Ok(Self { vocabulary, idf })
    }

    pub fn dimension(&self) -> usize {
        self.idf.len()
    }
}

impl Vectorizer for TfidfVectorizer {
    fn vectorize(&self, cleaned_text: &str) -> Result<FeatureVector, ClassifierError> {
        let lowered = cleaned_text.to_lowercase();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in TOKEN_RE.find_iter(&lowered) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, tf)| (column, tf * self.idf[column]))
            .collect();

        let norm = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in &mut entries {
                *value /= norm;
            }
        }

        Ok(FeatureVector {
            dimension: self.dimension(),
            entries,
        })
    }
}
