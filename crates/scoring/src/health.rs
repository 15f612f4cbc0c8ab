//! Health grade: five weighted nutrition and ingredient-quality categories
//! summed to 0–100 and mapped to a letter grade.
//!
//! | Category            | Max |
//! |---------------------|-----|
//! | macronutrient balance | 25 |
//! | calorie density     | 20  |
//! | nutrient density    | 25  |
//! | ingredient quality  | 20  |
//! | sugar and sodium    | 10  |
//!
//! Every category is an integer, so the breakdown always sums exactly to the
//! score.

use forkcast_shared::{NutritionFacts, Recipe, RecipeSummary};
use forkcast_signals::{
    PROCESSED_FOODS, RecipeText, SODIUM_INDICATORS, SUGAR_INDICATORS, WHOLE_FOODS,
};
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// ≥90 A, ≥80 B, ≥70 C, ≥60 D, otherwise F.
pub fn assign_grade(score: u8) -> Grade {
    match score {
        90.. => Grade::A,
        80..=89 => Grade::B,
        70..=79 => Grade::C,
        60..=69 => Grade::D,
        _ => Grade::F,
    }
}

/// Fields the health grade reads: macros plus the text whole-food, processed,
/// sugar and sodium signals are inferred from.
#[derive(Debug, Clone)]
pub struct HealthInput {
    pub nutrition: NutritionFacts,
    pub text: RecipeText,
}

impl From<&RecipeSummary> for HealthInput {
    fn from(recipe: &RecipeSummary) -> Self {
        Self {
            nutrition: recipe.nutrition,
            text: RecipeText::from_summary(recipe),
        }
    }
}

impl From<&Recipe> for HealthInput {
    fn from(recipe: &Recipe) -> Self {
        Self::from(&recipe.summary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthBreakdown {
    pub macronutrient_balance: u8,
    pub calorie_density: u8,
    pub nutrient_density: u8,
    pub ingredient_quality: u8,
    pub sugar_sodium: u8,
}

impl HealthBreakdown {
    pub fn total(&self) -> u8 {
        self.macronutrient_balance
            + self.calorie_density
            + self.nutrient_density
            + self.ingredient_quality
            + self.sugar_sodium
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthGrade {
    pub score: u8,
    pub grade: Grade,
    pub breakdown: HealthBreakdown,
    pub whole_foods: Vec<&'static str>,
    pub processed_foods: Vec<&'static str>,
    /// Explicit sugar value, or the keyword-based estimate.
    pub estimated_sugar_g: f64,
    pub estimated_sodium_mg: f64,
}

pub fn calculate_health_grade(input: &HealthInput) -> HealthGrade {
    let facts = &input.nutrition;
    let whole_foods = WHOLE_FOODS.matches(&input.text);
    let processed_foods = PROCESSED_FOODS.matches(&input.text);
    let sugar_g = facts
        .sugar_g
        .unwrap_or_else(|| estimate_sugar_g(SUGAR_INDICATORS.count(&input.text)));
    let sodium_mg = estimate_sodium_mg(SODIUM_INDICATORS.count(&input.text));

    let breakdown = HealthBreakdown {
        macronutrient_balance: protein_adequacy(facts.protein_g)
            + macro_balance(facts)
            + fat_quality(facts),
        calorie_density: calorie_range(facts.calories) + calorie_efficiency(facts),
        nutrient_density: fiber_score(facts.fiber_g, facts.calories)
            + protein_efficiency(facts)
            + whole_food_richness(whole_foods.len(), processed_foods.len()),
        ingredient_quality: whole_food_presence(whole_foods.len())
            + processed_penalty(processed_foods.len()),
        sugar_sodium: sugar_score(sugar_g) + sodium_score(sodium_mg),
    };

    let score = breakdown.total().min(100);

    HealthGrade {
        score,
        grade: assign_grade(score),
        breakdown,
        whole_foods,
        processed_foods,
        estimated_sugar_g: sugar_g,
        estimated_sodium_mg: sodium_mg,
    }
}

/// Share of the recipe's calories contributed by protein, carbs and fat.
/// Falls back to the macro calorie sum when calories are unknown.
fn macro_shares(facts: &NutritionFacts) -> Option<(f64, f64, f64)> {
    let protein = facts.protein_g.max(0.0) * 4.0;
    let carbs = facts.carbs_g.max(0.0) * 4.0;
    let fat = facts.fat_g.max(0.0) * 9.0;
    let total = if facts.calories > 0.0 {
        facts.calories
    } else {
        protein + carbs + fat
    };

    if total <= 0.0 {
        return None;
    }

    Some((protein / total, carbs / total, fat / total))
}

/// Protein calories over total calories, 0 when calories are unknown.
fn protein_ratio(facts: &NutritionFacts) -> f64 {
    if facts.calories <= 0.0 {
        return 0.0;
    }

    facts.protein_g.max(0.0) * 4.0 / facts.calories
}

fn fiber_ratio(facts: &NutritionFacts) -> f64 {
    if facts.calories <= 0.0 {
        return 0.0;
    }

    facts.fiber_g.max(0.0) / facts.calories
}

fn protein_adequacy(protein_g: f64) -> u8 {
    if protein_g >= 20.0 {
        10
    } else if protein_g >= 15.0 {
        7
    } else if protein_g >= 10.0 {
        4
    } else {
        0
    }
}

fn macro_balance(facts: &NutritionFacts) -> u8 {
    let Some((protein, carbs, fat)) = macro_shares(facts) else {
        return 2;
    };

    let dominant = protein.max(carbs).max(fat);

    if dominant > 0.70 {
        2
    } else if dominant > 0.60 {
        6
    } else {
        10
    }
}

fn fat_quality(facts: &NutritionFacts) -> u8 {
    if facts.fat_g > 40.0 {
        return 1;
    }

    let balanced = macro_shares(facts)
        .is_some_and(|(protein, carbs, _)| protein > 0.20 || carbs > 0.40);

    if facts.fat_g <= 25.0 && balanced { 5 } else { 3 }
}

fn calorie_range(calories: f64) -> u8 {
    if (300.0..=600.0).contains(&calories) {
        15
    } else if calories > 600.0 && calories <= 750.0 {
        12
    } else if (150.0..300.0).contains(&calories) {
        12
    } else if calories < 150.0 {
        10
    } else if calories <= 900.0 {
        8
    } else {
        3
    }
}

fn calorie_efficiency(facts: &NutritionFacts) -> u8 {
    let protein = protein_ratio(facts);
    let fiber = fiber_ratio(facts);

    if protein >= 0.20 || fiber >= 0.03 {
        5
    } else if protein >= 0.10 || fiber >= 0.015 {
        3
    } else {
        1
    }
}

/// Thresholds of 5/3/1 g, pro-rated for meals under 300 calories.
fn fiber_score(fiber_g: f64, calories: f64) -> u8 {
    let scale = if calories < 300.0 {
        calories.max(1.0) / 300.0
    } else {
        1.0
    };

    if fiber_g >= 5.0 * scale {
        10
    } else if fiber_g >= 3.0 * scale {
        7
    } else if fiber_g >= 1.0 * scale {
        4
    } else {
        0
    }
}

fn protein_efficiency(facts: &NutritionFacts) -> u8 {
    match protein_ratio(facts) {
        r if r >= 0.20 => 10,
        r if r >= 0.15 => 8,
        r if r >= 0.10 => 6,
        r if r >= 0.05 => 3,
        _ => 0,
    }
}

fn whole_food_richness(healthy: usize, unhealthy: usize) -> u8 {
    if healthy >= 5 && unhealthy == 0 {
        5
    } else if healthy >= 3 && unhealthy <= 1 {
        3
    } else {
        1
    }
}

fn whole_food_presence(count: usize) -> u8 {
    match count {
        5.. => 10,
        3..=4 => 7,
        1..=2 => 4,
        0 => 0,
    }
}

fn processed_penalty(count: usize) -> u8 {
    match count {
        0 => 10,
        1 => 6,
        2..=3 => 3,
        _ => 0,
    }
}

/// Rough grams from keyword hits: 0/1/2/3+ hits map to 0/10/20/30 g.
pub fn estimate_sugar_g(hits: usize) -> f64 {
    (hits.min(3) * 10) as f64
}

/// Rough milligrams from keyword hits: 0/1/2/3+ hits map to
/// 300/700/1200/1800 mg.
pub fn estimate_sodium_mg(hits: usize) -> f64 {
    match hits {
        0 => 300.0,
        1 => 700.0,
        2 => 1200.0,
        _ => 1800.0,
    }
}

fn sugar_score(sugar_g: f64) -> u8 {
    if sugar_g < 10.0 {
        5
    } else if sugar_g <= 20.0 {
        3
    } else if sugar_g <= 30.0 {
        1
    } else {
        0
    }
}

fn sodium_score(sodium_mg: f64) -> u8 {
    if sodium_mg < 600.0 {
        5
    } else if sodium_mg <= 1000.0 {
        3
    } else if sodium_mg <= 1500.0 {
        1
    } else {
        0
    }
}
