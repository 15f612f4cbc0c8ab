use std::ops::Deref;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

/// Author-declared or computed recipe difficulty, ordered easiest first.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn rank(self) -> i8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    #[default]
    Mild,
    Medium,
    Spicy,
    #[strum(to_string = "very_spicy", serialize = "very-spicy")]
    #[serde(alias = "very-spicy")]
    VerySpicy,
}

impl SpiceLevel {
    pub fn rank(self) -> i8 {
        match self {
            SpiceLevel::Mild => 1,
            SpiceLevel::Medium => 2,
            SpiceLevel::Spicy => 3,
            SpiceLevel::VerySpicy => 4,
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    #[strum(to_string = "gluten_free", serialize = "gluten-free")]
    #[serde(alias = "gluten-free")]
    GlutenFree,
    #[strum(to_string = "dairy_free", serialize = "dairy-free")]
    #[serde(alias = "dairy-free")]
    DairyFree,
    #[strum(to_string = "nut_free", serialize = "nut-free")]
    #[serde(alias = "nut-free")]
    NutFree,
    #[strum(to_string = "shellfish_free", serialize = "shellfish-free")]
    #[serde(alias = "shellfish-free")]
    ShellfishFree,
    Kosher,
    Halal,
    Paleo,
    Keto,
    #[strum(to_string = "low_sodium", serialize = "low-sodium")]
    #[serde(alias = "low-sodium")]
    LowSodium,
    #[strum(to_string = "low_carb", serialize = "low-carb")]
    #[serde(alias = "low-carb")]
    LowCarb,
}

impl DietaryRestriction {
    pub fn exists_in<'a>(
        &self,
        iterator: impl IntoIterator<Item = &'a DietaryRestriction>,
    ) -> bool {
        iterator.into_iter().any(|d| d == self)
    }
}

/// Per-serving macro facts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sugar_g: Option<f64>,
}

/// Meal-prep flags written by the offline analysis job. Read-only here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuitabilityFlags {
    pub meal_prep_suitable: bool,
    pub freezable: bool,
    pub batch_friendly: bool,
    pub weekly_prep_friendly: bool,
}

/// Quality and popularity figures from the third-party enrichment lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalMetrics {
    pub quality_score: Option<f64>,
    pub popularity_score: Option<f64>,
}

/// Lightweight recipe projection: everything except instruction text.
///
/// This is the shape the candidate fetch returns and the shape Quick Score,
/// Full Score, batch ranking and similarity work on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeSummary {
    pub id: String,
    /// Author of a user-created recipe, `None` for the shared catalog.
    pub created_by: Option<String>,
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub meal_type: Option<MealType>,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub nutrition: NutritionFacts,
    pub ingredients: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub flags: SuitabilityFlags,
    pub external: ExternalMetrics,
}

impl RecipeSummary {
    pub fn is_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine.trim().eq_ignore_ascii_case(cuisine.trim())
    }
}

/// Fully hydrated recipe including instruction steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(summary: RecipeSummary, instructions: Vec<String>) -> Self {
        Self {
            summary,
            instructions,
        }
    }

    pub fn into_summary(self) -> RecipeSummary {
        self.summary
    }
}

impl Deref for Recipe {
    type Target = RecipeSummary;

    fn deref(&self) -> &Self::Target {
        &self.summary
    }
}

impl From<RecipeSummary> for Recipe {
    fn from(summary: RecipeSummary) -> Self {
        Self::new(summary, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dietary_restriction_parse_aliases() {
        assert_eq!(
            "gluten-free".parse::<DietaryRestriction>().ok(),
            Some(DietaryRestriction::GlutenFree)
        );
        assert_eq!(
            "Low_Sodium".parse::<DietaryRestriction>().ok(),
            Some(DietaryRestriction::LowSodium)
        );
        assert_eq!(DietaryRestriction::NutFree.to_string(), "nut_free");
    }

    #[test]
    fn test_recipe_json_is_flat() {
        let json = r#"{"id":"r1","title":"Soup","cuisine":"French","instructions":["Boil"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.instructions, vec!["Boil".to_owned()]);
        assert!(recipe.is_cuisine("french"));
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Hard > Difficulty::Medium);
        assert_eq!(SpiceLevel::VerySpicy.to_string(), "very_spicy");
        assert_eq!(
            "very-spicy".parse::<SpiceLevel>().ok(),
            Some(SpiceLevel::VerySpicy)
        );
    }
}
