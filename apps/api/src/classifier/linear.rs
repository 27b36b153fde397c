//! One-vs-rest linear classifier.

use crate::classifier::{ClassPredictor, ClassifierError, FeatureVector};

/// Decision function `coef · x + intercept` per row; the highest row wins.
///
/// A binary model carries one row and two classes: positive score → `classes[1]`.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    classes: Vec<i64>,
}

impl LinearClassifier {
    pub fn new(
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
        classes: Vec<i64>,
    ) -> Result<Self, ClassifierError> {
        let rows = coef.len();
        if rows == 0 {
            return Err(ClassifierError::InvalidModel("coefficient matrix is empty".to_string()));
        }
        let width = coef[0].len();
        if coef.iter().any(|row| row.len() != width) {
            return Err(ClassifierError::InvalidModel(
                "coefficient rows differ in length".to_string(),
            ));
        }
        if intercept.len() != rows {
            return Err(ClassifierError::InvalidModel(format!(
                "{} intercepts for {rows} coefficient rows",
                intercept.len()
            )));
        }
        let binary = rows == 1 && classes.len() == 2;
        if classes.len() != rows && !binary {
            return Err(ClassifierError::InvalidModel(format!(
                "{} classes for {rows} coefficient rows",
                classes.len()
            )));
        }
        Ok(Self {
            coef,
            intercept,
            classes,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coef[0].len()
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn decision(&self, features: &FeatureVector) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| features.dot(row) + b)
            .collect()
    }
}

impl ClassPredictor for LinearClassifier {
    fn predict_class_id(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        if features.dimension != self.n_features() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.n_features(),
                actual: features.dimension,
            });
        }

        let scores = self.decision(features);
        if self.coef.len() == 1 && self.classes.len() == 2 {
            return Ok(if scores[0] > 0.0 {
                self.classes[1]
            } else {
                self.classes[0]
            });
        }

        // First maximum wins on ties.
        let best = scores
            .iter()
            .enumerate()
            .fold(0, |best, (i, &score)| if score > scores[best] { i } else { best });
        Ok(self.classes[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: Vec<(usize, f64)>) -> FeatureVector {
        FeatureVector {
            dimension: 3,
            entries,
        }
    }

    fn three_class() -> LinearClassifier {
        LinearClassifier::new(
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            vec![0.0, 0.0, 0.0],
            vec![10, 20, 30],
        )
        .unwrap()
    }

    #[test]
    fn test_highest_score_wins() {
        let id = three_class()
            .predict_class_id(&vector(vec![(0, 0.2), (2, 0.9)]))
            .unwrap();
        assert_eq!(id, 30);
    }

    #[test]
    fn test_tie_goes_to_first_class() {
        let id = three_class().predict_class_id(&vector(vec![])).unwrap();
        assert_eq!(id, 10);
    }

    #[test]
    fn test_intercept_shifts_decision() {
        let model = LinearClassifier::new(
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]],
            vec![0.0, 0.5],
            vec![0, 1],
        )
        .unwrap();
        assert_eq!(model.predict_class_id(&vector(vec![(0, 0.4)])).unwrap(), 1);
    }

    #[test]
    fn test_binary_model_uses_sign() {
        let model = LinearClassifier::new(vec![vec![1.0, -1.0, 0.0]], vec![0.0], vec![0, 1]).unwrap();
        assert_eq!(model.predict_class_id(&vector(vec![(0, 1.0)])).unwrap(), 1);
        assert_eq!(model.predict_class_id(&vector(vec![(1, 1.0)])).unwrap(), 0);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let err = three_class()
            .predict_class_id(&FeatureVector {
                dimension: 5,
                entries: vec![],
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::DimensionMismatch {
                expected: 3,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_rejects_inconsistent_shapes() {
        assert!(LinearClassifier::new(vec![], vec![], vec![]).is_err());
        assert!(LinearClassifier::new(vec![vec![1.0], vec![1.0, 2.0]], vec![0.0, 0.0], vec![0, 1]).is_err());
        assert!(LinearClassifier::new(vec![vec![1.0]], vec![0.0, 1.0], vec![0]).is_err());
        assert!(LinearClassifier::new(vec![vec![1.0], vec![2.0]], vec![0.0, 0.0], vec![0]).is_err());
    }
}
