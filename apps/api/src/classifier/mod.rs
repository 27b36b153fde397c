//! Category classifier — vectorize → predict class id → decode label.
//!
//! Each step is its own capability trait so the screening pipeline can run against
//! stubs in tests. The shipped implementations (TF-IDF, one-vs-rest linear model,
//! label encoder) are loaded once from a JSON artifact file and shared read-only.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod artifacts;
pub mod labels;
pub mod linear;
pub mod tfidf;

pub use artifacts::ModelArtifacts;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("feature dimension mismatch: model expects {expected}, vector has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("class id {0} has no label")]
    UnknownClass(i64),

    #[error("invalid model artifacts: {0}")]
    InvalidModel(String),

    #[error("failed to read model artifacts: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifacts: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sparse feature vector: `(column, value)` pairs sorted by column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    pub dimension: usize,
    pub entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Dot product with a dense row of the same dimension.
    pub fn dot(&self, row: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(column, value)| row.get(column).copied().unwrap_or(0.0) * value)
            .sum()
    }
}

pub trait Vectorizer: Send + Sync {
    fn vectorize(&self, cleaned_text: &str) -> Result<FeatureVector, ClassifierError>;
}

pub trait ClassPredictor: Send + Sync {
    fn predict_class_id(&self, features: &FeatureVector) -> Result<i64, ClassifierError>;
}

pub trait LabelDecoder: Send + Sync {
    fn decode_label(&self, class_id: i64) -> Result<String, ClassifierError>;
}

/// A predicted resume category and the class id it was decoded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPrediction {
    pub class_id: i64,
    pub label: String,
}

/// The three capabilities chained together. Cheap to clone.
#[derive(Clone)]
pub struct CategoryClassifier {
    vectorizer: Arc<dyn Vectorizer>,
    predictor: Arc<dyn ClassPredictor>,
    decoder: Arc<dyn LabelDecoder>,
}

impl CategoryClassifier {
    pub fn new(
        vectorizer: Arc<dyn Vectorizer>,
        predictor: Arc<dyn ClassPredictor>,
        decoder: Arc<dyn LabelDecoder>,
    ) -> Self {
        Self {
            vectorizer,
            predictor,
            decoder,
        }
    }

    /// Classifies one cleaned resume. Any failing step aborts the prediction.
    pub fn predict(&self, cleaned_text: &str) -> Result<CategoryPrediction, ClassifierError> {
        let features = self.vectorizer.vectorize(cleaned_text)?;
        let class_id = self.predictor.predict_class_id(&features)?;
        let label = self.decoder.decode_label(class_id)?;
        Ok(CategoryPrediction { class_id, label })
    }
}
