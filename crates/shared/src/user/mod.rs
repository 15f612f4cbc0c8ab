use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{DietaryRestriction, SpiceLevel};

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
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn rank(self) -> i8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
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
pub enum FitnessGoal {
    LoseWeight,
    GainMuscle,
    Maintain,
}

/// Daily macro targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroGoals {
    pub daily_calories: f64,
    pub daily_protein_g: f64,
    pub daily_carbs_g: Option<f64>,
    pub daily_fat_g: Option<f64>,
}

/// Per-request view assembled from the user's preference records.
///
/// Cuisine, ingredient and restriction lists have set semantics; order is
/// irrelevant. A banned ingredient is an absolute veto.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserScoringPreferences {
    pub liked_cuisines: Vec<String>,
    pub banned_ingredients: Vec<String>,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Minutes.
    pub cook_time_preference: Option<u32>,
    pub spice_level: Option<SpiceLevel>,
    pub skill_level: Option<SkillLevel>,
    pub macro_goals: Option<MacroGoals>,
    pub fitness_goal: Option<FitnessGoal>,
}

impl UserScoringPreferences {
    pub fn likes_cuisine(&self, cuisine: &str) -> bool {
        let cuisine = cuisine.trim();
        self.liked_cuisines
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(cuisine))
    }
}

/// Recent history used to nudge Full Score. Never vetoes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehavioralSignal {
    pub liked_recipe_ids: Vec<String>,
    pub disliked_recipe_ids: Vec<String>,
    /// Cuisines of meals eaten in the last 7 days.
    pub recent_cuisines: Vec<String>,
}

impl BehavioralSignal {
    pub fn is_liked(&self, recipe_id: &str) -> bool {
        self.liked_recipe_ids.iter().any(|id| id == recipe_id)
    }

    pub fn is_disliked(&self, recipe_id: &str) -> bool {
        self.disliked_recipe_ids.iter().any(|id| id == recipe_id)
    }

    pub fn ate_cuisine_recently(&self, cuisine: &str) -> bool {
        let cuisine = cuisine.trim();
        self.recent_cuisines
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(cuisine))
    }
}
