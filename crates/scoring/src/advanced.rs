use forkcast_shared::{Recipe, UserScoringPreferences};
use forkcast_signals::RecipeText;
use serde::Serialize;

use crate::{
    ComplexityInput, DietaryCompliance, SpiceInput, VetoReason, Verdict,
    check_dietary_compliance, skill_level_match, spice_level_match,
};

/// Weights in tenths: 0.3 spice, 0.3 skill, 0.4 compliance.
const SPICE_WEIGHT: u32 = 3;
const SKILL_WEIGHT: u32 = 3;
const COMPLIANCE_WEIGHT: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedMatch {
    pub recipe_id: String,
    pub spice_match: u8,
    pub skill_match: u8,
    pub dietary: DietaryCompliance,
    pub overall: u8,
    pub verdict: Verdict,
}

/// Spice, skill and dietary fit of a hydrated recipe. A dietary violation
/// vetoes the overall score.
pub fn advanced_match(recipe: &Recipe, prefs: &UserScoringPreferences) -> AdvancedMatch {
    let spice_match = spice_level_match(&SpiceInput::from(recipe), prefs.spice_level);
    let skill_match = skill_level_match(&ComplexityInput::from(recipe), prefs.skill_level);
    let dietary = check_dietary_compliance(
        &RecipeText::from_recipe(recipe),
        &prefs.dietary_restrictions,
    );

    let verdict = match dietary.violations.first() {
        Some(violation) => Verdict::Vetoed(VetoReason::DietaryRestriction {
            restriction: violation.restriction,
            term: violation.term.to_owned(),
        }),
        None => {
            let tenths = SPICE_WEIGHT * spice_match as u32
                + SKILL_WEIGHT * skill_match as u32
                + COMPLIANCE_WEIGHT * dietary.score as u32;
            Verdict::Scored(crate::clamp_score((tenths as f64 / 10.0).round() as i32))
        }
    };

    AdvancedMatch {
        recipe_id: recipe.id.clone(),
        spice_match,
        skill_match,
        overall: verdict.value(),
        dietary,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkcast_shared::{DietaryRestriction, RecipeSummary, SkillLevel, SpiceLevel};

    fn recipe(ingredients: &[&str]) -> Recipe {
        Recipe::new(
            RecipeSummary {
                id: "r1".to_owned(),
                title: "Garden salad".to_owned(),
                cuisine: "French".to_owned(),
                cook_time: 10,
                ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
                ..Default::default()
            },
            vec!["Toss everything".to_owned()],
        )
    }

    #[test]
    fn test_neutral_preferences() {
        let result = advanced_match(&recipe(&["lettuce"]), &UserScoringPreferences::default());

        assert_eq!(result.spice_match, 50);
        assert_eq!(result.skill_match, 50);
        assert_eq!(result.dietary.score, 100);
        // 15 + 15 + 40
        assert_eq!(result.overall, 70);
    }

    #[test]
    fn test_matching_preferences() {
        let prefs = UserScoringPreferences {
            spice_level: Some(SpiceLevel::Mild),
            skill_level: Some(SkillLevel::Beginner),
            dietary_restrictions: vec![DietaryRestriction::Vegetarian],
            ..Default::default()
        };
        let result = advanced_match(&recipe(&["lettuce", "tomato"]), &prefs);

        // 0.3 * 95 + 0.3 * 90 + 0.4 * 100 = 95.5
        assert_eq!(result.overall, 96);
        assert_eq!(result.verdict, Verdict::Scored(96));
    }

    #[test]
    fn test_dietary_violation_vetoes() {
        let prefs = UserScoringPreferences {
            dietary_restrictions: vec![DietaryRestriction::Vegetarian],
            ..Default::default()
        };
        let result = advanced_match(&recipe(&["lettuce", "chicken"]), &prefs);

        assert_eq!(result.overall, 0);
        assert!(!result.dietary.is_compliant);
        assert_eq!(
            result.verdict,
            Verdict::Vetoed(VetoReason::DietaryRestriction {
                restriction: DietaryRestriction::Vegetarian,
                term: "chicken".to_owned(),
            })
        );
    }
}
