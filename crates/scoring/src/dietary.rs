use forkcast_shared::DietaryRestriction;
use forkcast_signals::{RecipeText, find_violation};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DietaryViolation {
    pub restriction: DietaryRestriction,
    pub term: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DietaryCompliance {
    pub is_compliant: bool,
    /// `max(0, 100 - 50 * violations)`.
    pub score: u8,
    pub violations: Vec<DietaryViolation>,
}

/// Checks the recipe text against every requested restriction.
///
/// Each restriction reports at most one violation, the first forbidden term
/// found. Terms are matched on word boundaries.
pub fn check_dietary_compliance(
    text: &RecipeText,
    restrictions: &[DietaryRestriction],
) -> DietaryCompliance {
    let violations = restrictions
        .iter()
        .filter_map(|restriction| {
            find_violation(*restriction, text).map(|term| DietaryViolation {
                restriction: *restriction,
                term,
                message: format!("contains {term}, not {restriction}"),
            })
        })
        .collect::<Vec<_>>();

    let penalty = 50 * violations.len().min(2) as i32;

    DietaryCompliance {
        is_compliant: violations.is_empty(),
        score: crate::clamp_score(100 - penalty),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_restrictions_is_compliant() {
        let compliance = check_dietary_compliance(&RecipeText::new(["bacon"]), &[]);

        assert!(compliance.is_compliant);
        assert_eq!(compliance.score, 100);
    }

    #[test]
    fn test_vegan_rejects_cheese_and_milk() {
        let text = RecipeText::new(["Mac and cheese", "milk", "macaroni"]);
        let compliance = check_dietary_compliance(&text, &[DietaryRestriction::Vegan]);

        assert!(!compliance.is_compliant);
        assert_eq!(compliance.violations.len(), 1);
        assert_eq!(compliance.score, 50);
    }

    #[test]
    fn test_butterfly_is_not_butter() {
        let text = RecipeText::new(["Butterfly shrimp pasta"]);
        let compliance = check_dietary_compliance(&text, &[DietaryRestriction::DairyFree]);

        assert!(compliance.is_compliant);
        assert!(compliance.violations.is_empty());
    }

    #[test]
    fn test_score_floors_at_zero() {
        let text = RecipeText::new(["Shrimp alfredo", "cream", "pasta", "shrimp"]);
        let compliance = check_dietary_compliance(
            &text,
            &[
                DietaryRestriction::DairyFree,
                DietaryRestriction::GlutenFree,
                DietaryRestriction::ShellfishFree,
            ],
        );

        assert_eq!(compliance.violations.len(), 3);
        assert_eq!(compliance.score, 0);
        assert_eq!(compliance.violations[2].term, "shrimp");
    }
}
