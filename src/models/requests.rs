use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to predict a disease from a symptom selection
///
/// Symptoms arrive in display form ("skin rash"); the handler folds them
/// to column identifiers before matching. An empty selection is rejected
/// at validation, before the matcher runs.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1, message = "select at least one symptom"))]
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_fails_validation() {
        let req = PredictRequest { symptoms: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_empty_selection_passes_validation() {
        let req = PredictRequest {
            symptoms: vec!["itching".to_string()],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_symptoms_field_defaults_to_empty() {
        let req: PredictRequest = serde_json::from_str("{}").unwrap();
        assert!(req.symptoms.is_empty());
        assert!(req.validate().is_err());
    }
}
