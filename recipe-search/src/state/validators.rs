use crate::state::SuggestionField;

/// Check that `input` names one of the candidates exactly (after trimming)
pub fn check_candidate(input: &str, candidates: &[String], noun: &str) -> Result<(), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(format!("Enter a {} name", noun));
    }

    if candidates.iter().any(|c| c == input) {
        Ok(())
    } else {
        Err(format!("Unknown {}: {}", noun, input))
    }
}

/// Post-selection hook: validate the field's current input against its candidates
///
/// The outcome is reported through `field.validation`.
pub fn validate_candidate(field: &mut SuggestionField) {
    let result = check_candidate(
        field.input.value(),
        field.input.candidates(),
        field.kind.noun(),
    );

    match &result {
        Ok(()) => tracing::debug!("{} input is valid", field.kind.label()),
        Err(e) => tracing::debug!("{} input is invalid: {}", field.kind.label(), e),
    }

    field.validation = Some(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKind, SuggestionField};

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_candidate_is_valid() {
        let c = names(&["Fish Pie", "Pasta Bake"]);
        assert_eq!(check_candidate("Fish Pie", &c, "recipe"), Ok(()));
        assert_eq!(check_candidate("  Fish Pie ", &c, "recipe"), Ok(()));
    }

    #[test]
    fn empty_input_is_invalid() {
        let c = names(&["Fish Pie"]);
        assert_eq!(
            check_candidate("  ", &c, "recipe"),
            Err("Enter a recipe name".to_string())
        );
    }

    #[test]
    fn partial_or_wrong_case_is_invalid() {
        let c = names(&["Fish Pie"]);
        assert_eq!(
            check_candidate("fish pie", &c, "recipe"),
            Err("Unknown recipe: fish pie".to_string())
        );
        assert!(check_candidate("Fish", &c, "recipe").is_err());
    }

    #[test]
    fn hook_reports_through_field() {
        let mut field = SuggestionField::new(FieldKind::Location, names(&["Pelican Town"]), None);
        field.input.set_value("Nowhere");

        validate_candidate(&mut field);
        assert_eq!(
            field.validation,
            Some(Err("Unknown location: Nowhere".to_string()))
        );

        field.input.set_value("Pelican Town");
        validate_candidate(&mut field);
        assert_eq!(field.validation, Some(Ok(())));
    }
}
