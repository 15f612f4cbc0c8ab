use forkcast_shared::{Recipe, RecipeSummary, SpiceLevel};
use forkcast_signals::{HEAT_WORDS, RecipeText, SPICE_TIERS, SPICY_CUISINES};
use serde::Serialize;

const HEAT_WORD_BONUS: u32 = 2;
const SPICY_CUISINE_BONUS: u32 = 2;

/// Fields spice detection reads.
#[derive(Debug, Clone)]
pub struct SpiceInput<'a> {
    pub cuisine: &'a str,
    pub text: RecipeText,
}

impl<'a> From<&'a RecipeSummary> for SpiceInput<'a> {
    fn from(recipe: &'a RecipeSummary) -> Self {
        Self {
            cuisine: &recipe.cuisine,
            text: RecipeText::from_summary(recipe),
        }
    }
}

impl<'a> From<&'a Recipe> for SpiceInput<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self {
            cuisine: &recipe.cuisine,
            text: RecipeText::from_recipe(recipe),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiceDetection {
    pub level: SpiceLevel,
    pub score: u32,
    /// `min(1, score / 10)`.
    pub confidence: f64,
    pub indicators: Vec<String>,
}

/// Infers how hot a recipe is from tiered keywords, generic heat words and
/// the cuisine.
pub fn detect_spice_level(input: &SpiceInput<'_>) -> SpiceDetection {
    let mut score = 0;
    let mut indicators = vec![];

    for tier in SPICE_TIERS.iter() {
        for keyword in tier.family.matches(&input.text) {
            score += tier.points;
            indicators.push(keyword.to_owned());
        }
    }

    let heat_words = HEAT_WORDS.matches(&input.text);
    if !heat_words.is_empty() {
        score += HEAT_WORD_BONUS;
        indicators.extend(heat_words.into_iter().map(str::to_owned));
    }

    if SPICY_CUISINES.matches_value(input.cuisine) {
        score += SPICY_CUISINE_BONUS;
        indicators.push(input.cuisine.trim().to_lowercase());
    }

    SpiceDetection {
        level: spice_level_for_score(score),
        score,
        confidence: (score as f64 / 10.0).min(1.0),
        indicators,
    }
}

pub fn spice_level_for_score(score: u32) -> SpiceLevel {
    match score {
        0..=3 => SpiceLevel::Mild,
        4..=6 => SpiceLevel::Medium,
        7..=10 => SpiceLevel::Spicy,
        _ => SpiceLevel::VerySpicy,
    }
}

/// 0–100 agreement between the detected level and the user's preference.
/// Neutral 50 without a preference.
pub fn spice_level_match(input: &SpiceInput<'_>, preference: Option<SpiceLevel>) -> u8 {
    let Some(preference) = preference else {
        return 50;
    };

    let detected = detect_spice_level(input).level;

    match (detected.rank() - preference.rank()).abs() {
        0 => 95,
        1 => 75,
        2 => 45,
        _ => 20,
    }
}
