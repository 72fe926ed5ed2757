use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A symptom known to the dataset, with its severity weight
///
/// The weight ships with the dataset but plays no part in matching;
/// it is carried through for clients that want to display it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomInfo {
    pub name: String,
    pub weight: i64,
}

/// One labeled training example: a 0/1 indicator per known symptom
/// column, plus the disease the pattern maps to
#[derive(Debug, Clone)]
pub struct TrainingRow {
    pub indicators: Vec<bool>,
    pub disease: String,
}

/// The training table, kept in file order
///
/// Row order is part of the matching contract (ties go to the earlier
/// row), so rows are never re-sorted or deduplicated. The column map is
/// built once at load time so scans never do name-based lookups.
#[derive(Debug, Clone, Default)]
pub struct TrainingTable {
    columns: HashMap<String, usize>,
    rows: Vec<TrainingRow>,
}

impl TrainingTable {
    /// Build an empty table over the given symptom columns.
    ///
    /// The first occurrence of a repeated column name wins.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (idx, name) in columns.into_iter().enumerate() {
            map.entry(name.into()).or_insert(idx);
        }
        Self {
            columns: map,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: TrainingRow) {
        self.rows.push(row);
    }

    /// Column index for a symptom identifier, if the column exists
    #[inline]
    pub fn column(&self, symptom: &str) -> Option<usize> {
        self.columns.get(symptom).copied()
    }

    pub fn rows(&self) -> &[TrainingRow] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of the matching scan
///
/// `disease` is `None` when no row scored above zero, including for an
/// empty selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub disease: Option<String>,
    pub matched: usize,
}

impl MatchOutcome {
    pub fn no_match() -> Self {
        Self {
            disease: None,
            matched: 0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.disease.is_some()
    }
}

/// Reference text for a disease, one optional section per auxiliary table
///
/// Each section misses independently; a missing record simply leaves its
/// section unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    pub description: Option<String>,
    pub diet: Option<String>,
    pub workout: Option<String>,
    pub medication: Option<String>,
    pub precautions: Option<Vec<String>>,
}

impl Recommendation {
    /// True when every section missed
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.diet.is_none()
            && self.workout.is_none()
            && self.medication.is_none()
            && self.precautions.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_table_columns() {
        let table = TrainingTable::new(["itching", "skin_rash", "fatigue"]);
        assert_eq!(table.column("itching"), Some(0));
        assert_eq!(table.column("skin_rash"), Some(1));
        assert_eq!(table.column("fatigue"), Some(2));
        assert_eq!(table.column("sneezing"), None);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_duplicate_column_keeps_first() {
        let table = TrainingTable::new(["itching", "itching", "fatigue"]);
        assert_eq!(table.column("itching"), Some(0));
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut table = TrainingTable::new(["itching"]);
        table.push_row(TrainingRow {
            indicators: vec![true],
            disease: "Fungal infection".to_string(),
        });
        table.push_row(TrainingRow {
            indicators: vec![true],
            disease: "Allergy".to_string(),
        });

        let labels: Vec<&str> = table.rows().iter().map(|r| r.disease.as_str()).collect();
        assert_eq!(labels, vec!["Fungal infection", "Allergy"]);
    }

    #[test]
    fn test_recommendation_is_empty() {
        assert!(Recommendation::default().is_empty());

        let rec = Recommendation {
            diet: Some("balanced diet".to_string()),
            ..Default::default()
        };
        assert!(!rec.is_empty());
    }
}
