/// Fold a human-readable symptom label to its column identifier.
///
/// Display names use spaces ("skin rash"); training columns use
/// underscores ("skin_rash"). Leading, trailing, and repeated inner
/// whitespace collapses to a single underscore. No case folding is
/// applied: identifiers match byte-exactly against the dataset.
#[inline]
pub fn to_identifier(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Map a column identifier back to its display form.
#[inline]
pub fn to_display(identifier: &str) -> String {
    identifier.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_fold_to_underscores() {
        assert_eq!(to_identifier("skin rash"), "skin_rash");
        assert_eq!(to_identifier("high fever"), "high_fever");
    }

    #[test]
    fn test_identifier_passes_through() {
        assert_eq!(to_identifier("itching"), "itching");
        assert_eq!(to_identifier("skin_rash"), "skin_rash");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(to_identifier("  skin   rash  "), "skin_rash");
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("   "), "");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(to_identifier("Skin Rash"), "Skin_Rash");
    }

    #[test]
    fn test_display_form_roundtrip() {
        assert_eq!(to_display("skin_rash"), "skin rash");
        assert_eq!(to_identifier(&to_display("joint_pain")), "joint_pain");
    }
}
