//! Tier 2 score: Quick Score plus history, time of day and fitness goal.
//! Only ever run on the short list that survived Tier 1.

use forkcast_shared::{
    BehavioralSignal, FitnessGoal, MealType, Recipe, RecipeSummary, TemporalContext, TimeOfDay,
    UserScoringPreferences,
};
use forkcast_signals::{BREAKFAST_WORDS, RecipeText};
use serde::Serialize;

use crate::{QuickInput, Verdict, clamp_score, quick_score};

const LIGHT_MEAL_CALORIES: f64 = 400.0;
const HEAVY_MEAL_CALORIES: f64 = 700.0;

/// Fields Full Score reads on top of [`QuickInput`].
#[derive(Debug, Clone, Copy)]
pub struct FullInput<'a> {
    pub quick: QuickInput<'a>,
    pub title: &'a str,
    pub meal_type: Option<MealType>,
}

impl<'a> From<&'a RecipeSummary> for FullInput<'a> {
    fn from(recipe: &'a RecipeSummary) -> Self {
        Self {
            quick: QuickInput::from(recipe),
            title: &recipe.title,
            meal_type: recipe.meal_type,
        }
    }
}

impl<'a> From<&'a Recipe> for FullInput<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self::from(&recipe.summary)
    }
}

/// Signed adjustments applied to the Quick Score. All zero when vetoed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FullBreakdown {
    pub quick: u8,
    pub behavioral: i8,
    pub temporal: i8,
    pub goal: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullScore {
    pub recipe_id: String,
    pub score: u8,
    pub verdict: Verdict,
    pub breakdown: FullBreakdown,
}

pub fn full_score<'a>(
    recipe: impl Into<FullInput<'a>>,
    prefs: &UserScoringPreferences,
    behavior: &BehavioralSignal,
    temporal: &TemporalContext,
) -> FullScore {
    let recipe = recipe.into();
    let quick = quick_score(recipe.quick, prefs);

    if quick.verdict.is_vetoed() {
        return FullScore {
            recipe_id: quick.recipe_id,
            score: 0,
            verdict: quick.verdict,
            breakdown: FullBreakdown::default(),
        };
    }

    let breakdown = FullBreakdown {
        quick: quick.score,
        behavioral: behavioral_adjustment(&recipe, behavior),
        temporal: temporal_adjustment(&recipe, temporal),
        goal: goal_adjustment(&recipe, prefs.fitness_goal),
    };

    let score = clamp_score(
        breakdown.quick as i32
            + breakdown.behavioral as i32
            + breakdown.temporal as i32
            + breakdown.goal as i32,
    );

    FullScore {
        recipe_id: quick.recipe_id,
        score,
        verdict: Verdict::Scored(score),
        breakdown,
    }
}

fn behavioral_adjustment(recipe: &FullInput<'_>, behavior: &BehavioralSignal) -> i8 {
    let mut points = 0;

    if behavior.is_liked(recipe.quick.recipe_id) {
        points += 10;
    }

    if behavior.is_disliked(recipe.quick.recipe_id) {
        points -= 20;
    }

    if behavior.ate_cuisine_recently(recipe.quick.cuisine) {
        points -= 5;
    }

    points
}

fn temporal_adjustment(recipe: &FullInput<'_>, temporal: &TemporalContext) -> i8 {
    let calories = recipe.quick.calories;

    match temporal.time_of_day {
        TimeOfDay::Morning if is_breakfast(recipe) => 5,
        TimeOfDay::Afternoon if calories > HEAVY_MEAL_CALORIES => 3,
        TimeOfDay::Evening if calories > 0.0 && calories < LIGHT_MEAL_CALORIES => 3,
        _ => 0,
    }
}

/// Explicit meal type wins; untyped recipes fall back to title keywords.
fn is_breakfast(recipe: &FullInput<'_>) -> bool {
    match recipe.meal_type {
        Some(meal_type) => meal_type == MealType::Breakfast,
        None => BREAKFAST_WORDS.any(&RecipeText::new([recipe.title])),
    }
}

fn goal_adjustment(recipe: &FullInput<'_>, goal: Option<FitnessGoal>) -> i8 {
    let calories = recipe.quick.calories;
    let protein = recipe.quick.protein_g;

    match goal {
        Some(FitnessGoal::LoseWeight) => {
            let mut points = 0;
            if calories < 500.0 {
                points += 5;
            }
            if protein >= 25.0 {
                points += 5;
            }
            points
        }
        Some(FitnessGoal::GainMuscle) if protein >= 30.0 => 10,
        Some(FitnessGoal::GainMuscle) if protein >= 20.0 => 5,
        Some(FitnessGoal::Maintain) => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn summary() -> RecipeSummary {
        RecipeSummary {
            id: "r1".to_owned(),
            title: "Fluffy Pancakes".to_owned(),
            cuisine: "American".to_owned(),
            cook_time: 20,
            ingredients: vec!["flour".to_owned(), "milk".to_owned()],
            ..Default::default()
        }
    }

    fn morning() -> TemporalContext {
        TemporalContext::from_datetime(datetime!(2025-03-04 08:00 UTC))
    }

    #[test]
    fn test_breakfast_title_in_the_morning() {
        let score = full_score(
            &summary(),
            &UserScoringPreferences::default(),
            &BehavioralSignal::default(),
            &morning(),
        );

        assert_eq!(score.breakdown.quick, 50);
        assert_eq!(score.breakdown.temporal, 5);
        assert_eq!(score.score, 55);
    }

    #[test]
    fn test_explicit_meal_type_overrides_title() {
        let mut recipe = summary();
        recipe.meal_type = Some(MealType::Dinner);

        let score = full_score(
            &recipe,
            &UserScoringPreferences::default(),
            &BehavioralSignal::default(),
            &morning(),
        );
        assert_eq!(score.breakdown.temporal, 0);
    }

    #[test]
    fn test_behavioral_adjustments_stack() {
        let behavior = BehavioralSignal {
            liked_recipe_ids: vec!["r1".to_owned()],
            disliked_recipe_ids: vec!["r1".to_owned()],
            recent_cuisines: vec!["american".to_owned()],
        };

        let score = full_score(
            &summary(),
            &UserScoringPreferences::default(),
            &behavior,
            &TemporalContext::from_datetime(datetime!(2025-03-04 23:00 UTC)),
        );
        assert_eq!(score.breakdown.behavioral, -15);
        assert_eq!(score.score, 35);
    }

    #[test]
    fn test_goal_adjustments() {
        let mut recipe = summary();
        recipe.nutrition.calories = 450.0;
        recipe.nutrition.protein_g = 32.0;
        let input = FullInput::from(&recipe);

        assert_eq!(goal_adjustment(&input, Some(FitnessGoal::LoseWeight)), 10);
        assert_eq!(goal_adjustment(&input, Some(FitnessGoal::GainMuscle)), 10);
        assert_eq!(goal_adjustment(&input, Some(FitnessGoal::Maintain)), 2);
        assert_eq!(goal_adjustment(&input, None), 0);

        recipe.nutrition.protein_g = 22.0;
        let input = FullInput::from(&recipe);
        assert_eq!(goal_adjustment(&input, Some(FitnessGoal::GainMuscle)), 5);
        assert_eq!(goal_adjustment(&input, Some(FitnessGoal::LoseWeight)), 5);
    }

    #[test]
    fn test_heavy_afternoon_and_light_evening() {
        let mut recipe = summary();
        recipe.meal_type = Some(MealType::Lunch);
        recipe.nutrition.calories = 800.0;
        let afternoon = TemporalContext::from_datetime(datetime!(2025-03-04 13:00 UTC));
        assert_eq!(temporal_adjustment(&FullInput::from(&recipe), &afternoon), 3);

        recipe.nutrition.calories = 350.0;
        let evening = TemporalContext::from_datetime(datetime!(2025-03-04 19:00 UTC));
        assert_eq!(temporal_adjustment(&FullInput::from(&recipe), &evening), 3);
        assert_eq!(temporal_adjustment(&FullInput::from(&recipe), &afternoon), 0);
    }
}
