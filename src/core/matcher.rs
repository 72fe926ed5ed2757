use crate::models::{MatchOutcome, TrainingTable};

/// Scans the training table for the disease whose symptom pattern
/// overlaps the selection the most
///
/// # Contract
/// - Symptoms must already be folded to column identifiers (see
///   `core::normalize`); identifiers with no matching column count for
///   nothing and are not an error.
/// - Rows are scanned in table order with a strictly-greater comparison,
///   so the first row that reaches the maximal overlap wins ties. The
///   table may contain several rows per disease; preserving its order is
///   what makes results reproducible.
/// - A best score of zero means no match, which also covers an empty
///   selection. Callers reject empty selections before getting here, but
///   the scan does not rely on that.
///
/// Pure over its inputs: no state is read or written across calls, so
/// concurrent invocations over the shared table are safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Find the best-matching disease for a set of selected symptoms.
    ///
    /// O(rows × |selected|): identifiers resolve to column indices once
    /// up front, then each row is a counting pass over those indices.
    pub fn find_best_match(&self, selected: &[String], table: &TrainingTable) -> MatchOutcome {
        // Resolve names to columns once; unknown names drop out here.
        // The selection is a set, so repeated names count once.
        let mut columns: Vec<usize> = selected
            .iter()
            .filter_map(|symptom| table.column(symptom))
            .collect();
        columns.sort_unstable();
        columns.dedup();

        let mut best_score = 0usize;
        let mut best_disease: Option<&str> = None;

        for row in table.rows() {
            let score = columns
                .iter()
                .filter(|&&col| row.indicators.get(col).copied().unwrap_or(false))
                .count();

            // Strictly greater: ties keep the earlier row
            if score > best_score {
                best_score = score;
                best_disease = Some(&row.disease);
            }
        }

        MatchOutcome {
            disease: best_disease.map(str::to_owned),
            matched: best_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainingRow;

    fn sample_table() -> TrainingTable {
        let mut table = TrainingTable::new(["itching", "skin_rash", "fatigue"]);
        table.push_row(TrainingRow {
            indicators: vec![true, true, false],
            disease: "Fungal infection".to_string(),
        });
        table.push_row(TrainingRow {
            indicators: vec![true, false, false],
            disease: "Allergy".to_string(),
        });
        table.push_row(TrainingRow {
            indicators: vec![false, false, true],
            disease: "Hypothyroidism".to_string(),
        });
        table
    }

    fn selection(symptoms: &[&str]) -> Vec<String> {
        symptoms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_best_overlap_wins() {
        let matcher = Matcher::new();
        let outcome = matcher.find_best_match(&selection(&["itching", "skin_rash"]), &sample_table());

        assert_eq!(outcome.disease.as_deref(), Some("Fungal infection"));
        assert_eq!(outcome.matched, 2);
    }

    #[test]
    fn test_tie_goes_to_first_row() {
        // Both of the first two rows score 1 on itching alone.
        let matcher = Matcher::new();
        let outcome = matcher.find_best_match(&selection(&["itching"]), &sample_table());

        assert_eq!(outcome.disease.as_deref(), Some("Fungal infection"));
        assert_eq!(outcome.matched, 1);
    }

    #[test]
    fn test_empty_selection_is_no_match() {
        let matcher = Matcher::new();
        let outcome = matcher.find_best_match(&[], &sample_table());

        assert_eq!(outcome, MatchOutcome::no_match());
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_unknown_symptoms_count_for_nothing() {
        let matcher = Matcher::new();
        let outcome = matcher.find_best_match(&selection(&["sneezing", "vertigo"]), &sample_table());

        assert_eq!(outcome, MatchOutcome::no_match());
    }

    #[test]
    fn test_unknown_symptoms_do_not_disturb_known_ones() {
        let matcher = Matcher::new();
        let outcome =
            matcher.find_best_match(&selection(&["sneezing", "fatigue"]), &sample_table());

        assert_eq!(outcome.disease.as_deref(), Some("Hypothyroidism"));
        assert_eq!(outcome.matched, 1);
    }

    #[test]
    fn test_repeated_symptom_counts_once() {
        let matcher = Matcher::new();
        let outcome =
            matcher.find_best_match(&selection(&["itching", "itching"]), &sample_table());

        assert_eq!(outcome.matched, 1);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let matcher = Matcher::new();
        let table = sample_table();
        let selected = selection(&["itching", "fatigue"]);

        let first = matcher.find_best_match(&selected, &table);
        let second = matcher.find_best_match(&selected, &table);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_is_no_match() {
        let matcher = Matcher::new();
        let table = TrainingTable::new(["itching"]);
        let outcome = matcher.find_best_match(&selection(&["itching"]), &table);

        assert_eq!(outcome, MatchOutcome::no_match());
    }
}
