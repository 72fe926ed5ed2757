use serde::{Deserialize, Serialize};

/// Response for the predict endpoint
///
/// Auxiliary sections are independent: a section whose table has no
/// record for the disease is left out of the JSON entirely rather than
/// rendered as null or a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub disease: String,
    #[serde(rename = "matchedSymptoms")]
    pub matched_symptoms: usize,
    #[serde(rename = "totalSelected")]
    pub total_selected: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<Vec<String>>,
}

/// Response for the symptom list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "trainingRows")]
    pub training_rows: usize,
    pub symptoms: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_are_omitted() {
        let response = PredictResponse {
            disease: "Allergy".to_string(),
            matched_symptoms: 2,
            total_selected: 3,
            description: Some("An immune response.".to_string()),
            diet: None,
            workout: None,
            medication: None,
            precautions: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("description").is_some());
        assert!(json.get("diet").is_none());
        assert!(json.get("medication").is_none());
        assert!(json.get("precautions").is_none());
    }

    #[test]
    fn test_present_sections_are_serialized() {
        let response = PredictResponse {
            disease: "Allergy".to_string(),
            matched_symptoms: 1,
            total_selected: 1,
            description: None,
            diet: None,
            workout: None,
            medication: None,
            precautions: Some(vec!["avoid allergens".to_string()]),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["precautions"][0], "avoid allergens");
        assert_eq!(json["matchedSymptoms"], 1);
    }
}
