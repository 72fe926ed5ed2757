//! Remedi Algo - symptom matching service for the Remedi health app
//!
//! This library provides the disease-matching core used by the Remedi
//! app: a static training table scanned for the row with the greatest
//! symptom overlap, plus the read-only reference tables (description,
//! diet, workout, medications, precautions) rendered alongside a match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize::to_display, normalize::to_identifier, Matcher};
pub use crate::models::{
    MatchOutcome, PredictRequest, PredictResponse, Recommendation, SymptomInfo, TrainingRow,
    TrainingTable,
};
pub use crate::services::{DatasetError, DatasetStore};
