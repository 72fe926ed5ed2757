use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{normalize::to_identifier, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, PredictRequest, PredictResponse, SymptomsResponse,
};
use crate::services::DatasetStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<DatasetStore>,
    pub matcher: Matcher,
    pub max_selected: usize,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/symptoms", web::get().to(list_symptoms))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let training_rows = state.dataset.training().row_count();
    let status = if training_rows > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        training_rows,
        symptoms: state.dataset.symptom_count(),
    })
}

/// Symptom list endpoint
///
/// GET /api/v1/symptoms
///
/// Returns the sorted human-readable symptom names the client renders in
/// its selector.
async fn list_symptoms(state: web::Data<AppState>) -> impl Responder {
    let symptoms = state.dataset.symptom_display_list();

    HttpResponse::Ok().json(SymptomsResponse {
        total: symptoms.len(),
        symptoms,
    })
}

/// Predict endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "symptoms": ["itching", "skin rash"]
/// }
/// ```
///
/// Symptoms may use spaces or underscores. An empty selection is a user
/// error; a selection matching no training row is a not-found condition.
/// Auxiliary sections the dataset has no record for are left out of the
/// response.
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if req.validate().is_err() {
        tracing::info!("Rejected predict request with empty symptom selection");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "No symptoms selected".to_string(),
            message: "Please select at least one symptom.".to_string(),
            status_code: 400,
        });
    }

    if req.symptoms.len() > state.max_selected {
        tracing::info!(
            "Rejected predict request with {} symptoms (cap is {})",
            req.symptoms.len(),
            state.max_selected
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Too many symptoms".to_string(),
            message: format!(
                "At most {} symptoms can be submitted per request.",
                state.max_selected
            ),
            status_code: 400,
        });
    }

    // Fold display labels to column identifiers at the boundary; the
    // matcher only ever sees normalized names.
    let selected: Vec<String> = req.symptoms.iter().map(|s| to_identifier(s)).collect();

    let outcome = state
        .matcher
        .find_best_match(&selected, state.dataset.training());

    let Some(disease) = outcome.disease else {
        tracing::debug!("No training row overlaps selection {:?}", selected);
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "No disease found".to_string(),
            message: "No disease found for the selected symptoms.".to_string(),
            status_code: 404,
        });
    };

    let recommendation = state.dataset.recommendation_for(&disease);

    tracing::info!(
        "Predicted `{}` ({} of {} symptoms matched)",
        disease,
        outcome.matched,
        req.symptoms.len()
    );

    HttpResponse::Ok().json(PredictResponse {
        disease,
        matched_symptoms: outcome.matched,
        total_selected: req.symptoms.len(),
        description: recommendation.description,
        diet: recommendation.diet,
        workout: recommendation.workout,
        medication: recommendation.medication,
        precautions: recommendation.precautions,
    })
}
