//! Tier 1 score.
//!
//! Field-only and O(1) per recipe: no text scanning beyond the banned
//! ingredient check, no history, no clock. Safe to run over every candidate
//! the feed over-fetches.

use forkcast_shared::{MacroGoals, Recipe, RecipeSummary, UserScoringPreferences};
use serde::Serialize;

use crate::{VetoReason, Verdict, clamp_score};

pub const QUICK_BASELINE: i32 = 50;
const MEALS_PER_DAY: f64 = 3.0;

/// Fields Quick Score reads.
#[derive(Debug, Clone, Copy)]
pub struct QuickInput<'a> {
    pub recipe_id: &'a str,
    pub cuisine: &'a str,
    /// Minutes.
    pub cook_time: u32,
    pub calories: f64,
    pub protein_g: f64,
    pub ingredients: &'a [String],
}

impl<'a> From<&'a RecipeSummary> for QuickInput<'a> {
    fn from(recipe: &'a RecipeSummary) -> Self {
        Self {
            recipe_id: &recipe.id,
            cuisine: &recipe.cuisine,
            cook_time: recipe.cook_time,
            calories: recipe.nutrition.calories,
            protein_g: recipe.nutrition.protein_g,
            ingredients: &recipe.ingredients,
        }
    }
}

impl<'a> From<&'a Recipe> for QuickInput<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self::from(&recipe.summary)
    }
}

/// Sub-scores on a 0–100 scale; 50 means the input was neutral or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuickBreakdown {
    pub cuisine_match: u8,
    pub cook_time_match: u8,
    pub macro_match: u8,
    pub has_banned_ingredients: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickScore {
    pub recipe_id: String,
    pub score: u8,
    pub verdict: Verdict,
    pub breakdown: QuickBreakdown,
}

impl QuickScore {
    fn vetoed(recipe_id: &str, reason: VetoReason) -> Self {
        Self {
            recipe_id: recipe_id.to_owned(),
            score: 0,
            verdict: Verdict::Vetoed(reason),
            breakdown: QuickBreakdown {
                has_banned_ingredients: true,
                ..Default::default()
            },
        }
    }
}

pub fn quick_score<'a>(
    recipe: impl Into<QuickInput<'a>>,
    prefs: &UserScoringPreferences,
) -> QuickScore {
    let recipe = recipe.into();

    if let Some(ingredient) = find_banned_ingredient(recipe.ingredients, &prefs.banned_ingredients)
    {
        return QuickScore::vetoed(
            recipe.recipe_id,
            VetoReason::BannedIngredient {
                ingredient: ingredient.to_owned(),
            },
        );
    }

    let mut total = QUICK_BASELINE;
    let mut breakdown = QuickBreakdown {
        cuisine_match: 50,
        cook_time_match: 50,
        macro_match: 50,
        has_banned_ingredients: false,
    };

    if !prefs.liked_cuisines.is_empty() {
        if prefs.likes_cuisine(recipe.cuisine) {
            total += 40;
            breakdown.cuisine_match = 100;
        } else {
            total -= 30;
            breakdown.cuisine_match = 20;
        }
    }

    if let Some(preferred) = prefs.cook_time_preference {
        let (points, value) = cook_time_closeness(recipe.cook_time.abs_diff(preferred));
        total += points;
        breakdown.cook_time_match = value;
    }

    if let Some(goals) = &prefs.macro_goals {
        let score = macro_alignment(recipe.calories, recipe.protein_g, goals);
        total += match score {
            80.. => 15,
            60..=79 => 10,
            40..=59 => 5,
            _ => 0,
        };
        breakdown.macro_match = score;
    }

    let score = clamp_score(total);

    QuickScore {
        recipe_id: recipe.recipe_id.to_owned(),
        score,
        verdict: Verdict::Scored(score),
        breakdown,
    }
}

/// First banned entry found, case-insensitively, inside any ingredient line.
/// Blank entries never match.
pub fn find_banned_ingredient<'b>(ingredients: &[String], banned: &'b [String]) -> Option<&'b str> {
    if banned.is_empty() {
        return None;
    }

    let lines = ingredients
        .iter()
        .map(|line| line.to_lowercase())
        .collect::<Vec<_>>();

    banned
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .find(|b| {
            let needle = b.to_lowercase();
            lines.iter().any(|line| line.contains(&needle))
        })
}

/// Points added to the total and the 0–100 breakdown value for a cook-time
/// distance in minutes.
pub fn cook_time_closeness(delta: u32) -> (i32, u8) {
    match delta {
        0..=10 => (20, 100),
        11..=20 => (10, 75),
        21..=30 => (0, 50),
        _ => (-10, 25),
    }
}

/// `max(0, 100 - 50 * (calorie_rel_diff + protein_rel_diff))` against one of
/// three daily meals.
pub fn macro_alignment(calories: f64, protein_g: f64, goals: &MacroGoals) -> u8 {
    let calorie_target = goals.daily_calories / MEALS_PER_DAY;
    let protein_target = goals.daily_protein_g / MEALS_PER_DAY;

    let calorie_diff = (calories - calorie_target).abs() / calorie_target.max(1.0);
    let protein_diff = (protein_g - protein_target).abs() / protein_target.max(1.0);

    let score = (100.0 - 50.0 * (calorie_diff + protein_diff)).max(0.0);
    score.round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(cuisine: &str, cook_time: u32, ingredients: &[&str]) -> RecipeSummary {
        RecipeSummary {
            id: "r1".to_owned(),
            title: "Test".to_owned(),
            cuisine: cuisine.to_owned(),
            cook_time,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_preferences_is_baseline() {
        let score = quick_score(&recipe("Italian", 30, &[]), &UserScoringPreferences::default());

        assert_eq!(score.score, 50);
        assert_eq!(score.verdict, Verdict::Scored(50));
        assert_eq!(score.breakdown.cuisine_match, 50);
    }

    #[test]
    fn test_unliked_cuisine_penalty() {
        let prefs = UserScoringPreferences {
            liked_cuisines: vec!["Thai".to_owned()],
            ..Default::default()
        };
        let score = quick_score(&recipe("Italian", 30, &[]), &prefs);

        assert_eq!(score.score, 20);
        assert_eq!(score.breakdown.cuisine_match, 20);
    }

    #[test]
    fn test_banned_ingredient_is_case_insensitive() {
        let prefs = UserScoringPreferences {
            banned_ingredients: vec![" Cilantro ".to_owned()],
            liked_cuisines: vec!["Mexican".to_owned()],
            ..Default::default()
        };
        let score = quick_score(&recipe("Mexican", 10, &["2 tbsp CILANTRO, chopped"]), &prefs);

        assert_eq!(score.score, 0);
        assert!(score.breakdown.has_banned_ingredients);
        assert_eq!(
            score.verdict,
            Verdict::Vetoed(VetoReason::BannedIngredient {
                ingredient: "Cilantro".to_owned()
            })
        );
    }

    #[test]
    fn test_blank_banned_entry_is_ignored() {
        assert_eq!(
            find_banned_ingredient(&["rice".to_owned()], &["  ".to_owned()]),
            None
        );
    }

    #[test]
    fn test_cook_time_closeness_buckets() {
        assert_eq!(cook_time_closeness(0), (20, 100));
        assert_eq!(cook_time_closeness(10), (20, 100));
        assert_eq!(cook_time_closeness(11), (10, 75));
        assert_eq!(cook_time_closeness(20), (10, 75));
        assert_eq!(cook_time_closeness(30), (0, 50));
        assert_eq!(cook_time_closeness(31), (-10, 25));
    }

    #[test]
    fn test_macro_alignment() {
        let goals = MacroGoals {
            daily_calories: 1800.0,
            daily_protein_g: 90.0,
            ..Default::default()
        };

        assert_eq!(macro_alignment(600.0, 30.0, &goals), 100);
        // 10% off on both
        assert_eq!(macro_alignment(660.0, 27.0, &goals), 90);
        assert_eq!(macro_alignment(1800.0, 0.0, &goals), 0);
    }

    #[test]
    fn test_macro_bonus_is_added() {
        let prefs = UserScoringPreferences {
            macro_goals: Some(MacroGoals {
                daily_calories: 1800.0,
                daily_protein_g: 90.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut summary = recipe("Italian", 30, &[]);
        summary.nutrition.calories = 600.0;
        summary.nutrition.protein_g = 30.0;

        let score = quick_score(&summary, &prefs);
        assert_eq!(score.score, 65);
        assert_eq!(score.breakdown.macro_match, 100);
    }
}
