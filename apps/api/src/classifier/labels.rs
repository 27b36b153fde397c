use crate::classifier::{ClassifierError, LabelDecoder};

/// Maps class id `i` to `classes[i]`.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, ClassifierError> {
        if classes.is_empty() {
            return Err(ClassifierError::InvalidModel("label list is empty".to_string()));
        }
        Ok(Self { classes })
    }

    /// Number of categories; never zero.
    pub fn category_count(&self) -> usize {
        self.classes.len()
    }

    pub fn knows(&self, class_id: i64) -> bool {
        usize::try_from(class_id).is_ok_and(|i| i < self.classes.len())
    }
}

impl LabelDecoder for LabelEncoder {
    fn decode_label(&self, class_id: i64) -> Result<String, ClassifierError> {
        usize::try_from(class_id)
            .ok()
            .and_then(|i| self.classes.get(i))
            .cloned()
            .ok_or(ClassifierError::UnknownClass(class_id))
    }
}
