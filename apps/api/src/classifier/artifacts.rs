//! Model artifact file — the vectorizer, linear model and label list in one JSON
//! document, loaded once at start-up.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::labels::LabelEncoder;
use crate::classifier::linear::LinearClassifier;
use crate::classifier::tfidf::TfidfVectorizer;
use crate::classifier::{CategoryClassifier, ClassifierError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    pub classes: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub vectorizer: VectorizerArtifact,
    pub classifier: LinearArtifact,
    pub labels: Vec<String>,
}

impl ModelArtifacts {
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validates that the three parts fit together and builds the classifier chain.
    pub fn into_classifier(self) -> Result<CategoryClassifier, ClassifierError> {
        let vectorizer = TfidfVectorizer::new(self.vectorizer.vocabulary, self.vectorizer.idf)?;
        let model = LinearClassifier::new(
            self.classifier.coef,
            self.classifier.intercept,
            self.classifier.classes,
        )?;
        let labels = LabelEncoder::new(self.labels)?;

        if vectorizer.dimension() != model.n_features() {
            return Err(ClassifierError::InvalidModel(format!(
                "vectorizer produces {} features, model expects {}",
                vectorizer.dimension(),
                model.n_features()
            )));
        }
        if let Some(&unknown) = model.classes().iter().find(|&&id| !labels.knows(id)) {
            return Err(ClassifierError::InvalidModel(format!(
                "class id {unknown} has no entry in the label list"
            )));
        }

        info!(
            "Classifier loaded: {} features, {} categories",
            vectorizer.dimension(),
            labels.category_count()
        );

        Ok(CategoryClassifier::new(
            Arc::new(vectorizer),
            Arc::new(model),
            Arc::new(labels),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = include_str!("../../fixtures/classifier.json");

    #[test]
    fn test_fixture_classifies_each_category() {
        let classifier = ModelArtifacts::from_json(FIXTURE)
            .unwrap()
            .into_classifier()
            .unwrap();

        let ds = classifier.predict("Python SQL machine learning pandas").unwrap();
        assert_eq!(ds.label, "Data Science");
        assert_eq!(ds.class_id, 0);

        let finance = classifier.predict("accounting budgeting audit taxation").unwrap();
        assert_eq!(finance.label, "Finance");

        let hr = classifier.predict("recruitment onboarding hiring payroll").unwrap();
        assert_eq!(hr.label, "HR");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let artifacts = ModelArtifacts::load(file.path()).unwrap();
        assert_eq!(artifacts.labels.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ModelArtifacts::load(Path::new("/no/such/model.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ModelArtifacts::from_json("{\"vectorizer\": 3}").unwrap_err();
        assert!(matches!(err, ClassifierError::Parse(_)));
    }

    #[test]
    fn test_rejects_dimension_disagreement() {
        let mut artifacts = ModelArtifacts::from_json(FIXTURE).unwrap();
        artifacts.vectorizer.idf.push(1.0);
        let err = artifacts.into_classifier().err().unwrap();
        assert!(err.to_string().contains("features"));
    }

    #[test]
    fn test_rejects_class_without_label() {
        let mut artifacts = ModelArtifacts::from_json(FIXTURE).unwrap();
        artifacts.labels.truncate(2);
        let err = artifacts.into_classifier().err().unwrap();
        assert!(err.to_string().contains("no entry in the label list"));
    }
}
