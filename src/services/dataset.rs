use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::config::DatasetSettings;
use crate::core::normalize::to_display;
use crate::models::{Recommendation, SymptomInfo, TrainingRow, TrainingTable};

/// Label column of the training table
const LABEL_COLUMN: &str = "prognosis";

/// Errors that can occur while loading the reference dataset
///
/// Any of these is fatal at startup: there is no degraded mode for
/// read-only reference data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}: row {row}: {message}")]
    Row {
        path: PathBuf,
        row: usize,
        message: String,
    },
}

/// In-memory copy of the seven reference tables
///
/// Loaded once at startup from flat CSV files and immutable afterwards.
/// There is no write path, so the store can be shared freely across
/// workers without locking.
///
/// - The training table keeps its file order; the matcher's tie-break
///   depends on it.
/// - The five auxiliary maps are keyed by disease label. When a file
///   carries more than one record for a disease, the first record read
///   wins.
#[derive(Debug)]
pub struct DatasetStore {
    symptoms: Vec<SymptomInfo>,
    training: TrainingTable,
    descriptions: HashMap<String, String>,
    diets: HashMap<String, String>,
    workouts: HashMap<String, String>,
    medications: HashMap<String, String>,
    precautions: HashMap<String, Vec<String>>,
}

impl DatasetStore {
    /// Load all seven tables from the configured data directory.
    pub fn load(settings: &DatasetSettings) -> Result<Self, DatasetError> {
        let dir = Path::new(&settings.dir);

        let symptoms = load_symptoms(&dir.join(&settings.severity_file))?;
        let training = load_training(&dir.join(&settings.training_file))?;
        let descriptions =
            load_keyed(&dir.join(&settings.description_file), "Disease", "Description")?;
        let diets = load_keyed(&dir.join(&settings.diets_file), "Disease", "Diet")?;
        let medications =
            load_keyed(&dir.join(&settings.medications_file), "Disease", "Medication")?;
        // The workout file uses lowercase headers, unlike its siblings.
        let workouts = load_keyed(&dir.join(&settings.workout_file), "disease", "workout")?;
        let precautions = load_precautions(&dir.join(&settings.precautions_file))?;

        tracing::info!(
            "Dataset loaded: {} training rows, {} symptom columns, {} known symptoms",
            training.row_count(),
            training.column_count(),
            symptoms.len()
        );
        tracing::debug!(
            "Auxiliary tables: {} descriptions, {} diets, {} workouts, {} medications, {} precautions",
            descriptions.len(),
            diets.len(),
            workouts.len(),
            medications.len(),
            precautions.len()
        );

        Ok(Self {
            symptoms,
            training,
            descriptions,
            diets,
            workouts,
            medications,
            precautions,
        })
    }

    /// Process-wide store handle.
    ///
    /// The first call loads the dataset; every later call returns the
    /// same in-memory tables, so initialization is safe to repeat from a
    /// framework's perspective. Settings passed after the first call are
    /// ignored.
    pub fn shared(settings: &DatasetSettings) -> Result<Arc<DatasetStore>, DatasetError> {
        static STORE: OnceLock<Arc<DatasetStore>> = OnceLock::new();

        if let Some(store) = STORE.get() {
            return Ok(Arc::clone(store));
        }

        let store = Arc::new(Self::load(settings)?);
        Ok(Arc::clone(STORE.get_or_init(|| store)))
    }

    pub fn training(&self) -> &TrainingTable {
        &self.training
    }

    pub fn symptoms(&self) -> &[SymptomInfo] {
        &self.symptoms
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Sorted, deduplicated display names for the client's symptom
    /// selector ("skin_rash" is listed as "skin rash").
    pub fn symptom_display_list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .symptoms
            .iter()
            .map(|symptom| to_display(&symptom.name))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Assemble the five reference sections for a disease.
    ///
    /// Each table is looked up independently; a table with no record for
    /// the disease just leaves its section unset. No lookup here can
    /// fail.
    pub fn recommendation_for(&self, disease: &str) -> Recommendation {
        Recommendation {
            description: self.descriptions.get(disease).cloned(),
            diet: self.diets.get(disease).cloned(),
            workout: self.workouts.get(disease).cloned(),
            medication: self.medications.get(disease).cloned(),
            precautions: self.precautions.get(disease).cloned(),
        }
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, DatasetError> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn read_headers(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
) -> Result<csv::StringRecord, DatasetError> {
    reader
        .headers()
        .map(Clone::clone)
        .map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn column_index(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// A training cell counts as set only when it holds the value 1.
fn cell_is_one(cell: &str) -> bool {
    matches!(cell.trim().parse::<f64>(), Ok(value) if value == 1.0)
}

/// Load the symptom registry (identifier + severity weight).
fn load_symptoms(path: &Path) -> Result<Vec<SymptomInfo>, DatasetError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    let name_idx = column_index(&headers, "Symptom", path)?;
    let weight_idx = column_index(&headers, "weight", path)?;

    let mut symptoms = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        let raw_weight = record.get(weight_idx).unwrap_or("").trim();
        let weight = raw_weight
            .parse::<i64>()
            .map_err(|_| DatasetError::Row {
                path: path.to_path_buf(),
                row: row + 2,
                message: format!("invalid severity weight `{}`", raw_weight),
            })?;

        symptoms.push(SymptomInfo {
            name: name.to_string(),
            weight,
        });
    }

    Ok(symptoms)
}

/// Load the training table, preserving row order exactly as read.
///
/// Every header except the label column is a symptom column. The name to
/// index map is built here, once, so the matcher never resolves names
/// during a scan.
fn load_training(path: &Path) -> Result<TrainingTable, DatasetError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    let label_idx = column_index(&headers, LABEL_COLUMN, path)?;

    // (position in the CSV record, column name) for each symptom column
    let symptom_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != label_idx)
        .map(|(idx, name)| (idx, name.trim().to_string()))
        .collect();

    let mut table = TrainingTable::new(symptom_columns.iter().map(|(_, name)| name.clone()));

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let disease = record
            .get(label_idx)
            .ok_or_else(|| DatasetError::Row {
                path: path.to_path_buf(),
                row: row + 2,
                message: format!("missing `{}` value", LABEL_COLUMN),
            })?
            .trim()
            .to_string();
        if disease.is_empty() {
            continue;
        }

        let indicators = symptom_columns
            .iter()
            .map(|&(idx, _)| record.get(idx).map(cell_is_one).unwrap_or(false))
            .collect();

        table.push_row(TrainingRow {
            indicators,
            disease,
        });
    }

    Ok(table)
}

/// Load a two-column auxiliary table into a disease-keyed map.
///
/// The first record read for a disease wins; rows with an empty key or
/// value are skipped.
fn load_keyed(
    path: &Path,
    key_column: &str,
    value_column: &str,
) -> Result<HashMap<String, String>, DatasetError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    let key_idx = column_index(&headers, key_column, path)?;
    let value_idx = column_index(&headers, value_column, path)?;

    let mut map = HashMap::new();
    for result in reader.records() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let key = record.get(key_idx).unwrap_or("").trim();
        let value = record.get(value_idx).unwrap_or("").trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        map.entry(key.to_string()).or_insert_with(|| value.to_string());
    }

    Ok(map)
}

/// Load the precautions table: up to four strings per disease.
///
/// Empty cells are allowed and skipped; a disease whose row carries no
/// precaution text at all is treated as absent.
fn load_precautions(path: &Path) -> Result<HashMap<String, Vec<String>>, DatasetError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    let key_idx = column_index(&headers, "Disease", path)?;

    let precaution_columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| name.trim().starts_with("Precaution"))
        .map(|(idx, _)| idx)
        .collect();
    if precaution_columns.is_empty() {
        return Err(DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: "Precaution_1".to_string(),
        });
    }

    let mut map = HashMap::new();
    for result in reader.records() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let key = record.get(key_idx).unwrap_or("").trim();
        if key.is_empty() {
            continue;
        }

        let entries: Vec<String> = precaution_columns
            .iter()
            .filter_map(|&idx| record.get(idx))
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
        if entries.is_empty() {
            continue;
        }

        map.entry(key.to_string()).or_insert(entries);
    }

    Ok(map)
}
