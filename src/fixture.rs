//! JSON fixtures used to seed a catalog for local runs and tests.

use std::path::Path;

use forkcast_feed::SqliteStore;
use forkcast_shared::{Recipe, UserScoringPreferences};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Unix seconds; newest recipes are fetched first.
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixturePreferences {
    pub user_id: String,
    #[serde(flatten)]
    pub preferences: UserScoringPreferences,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFeedback {
    pub user_id: String,
    pub recipe_id: String,
    pub liked: bool,
    #[serde(default)]
    pub at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureMeal {
    pub user_id: String,
    pub recipe_id: String,
    pub cuisine: String,
    pub eaten_at: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub recipes: Vec<FixtureRecipe>,
    pub preferences: Vec<FixturePreferences>,
    pub feedback: Vec<FixtureFeedback>,
    pub meals: Vec<FixtureMeal>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ImportSummary {
    pub recipes: usize,
    pub preferences: usize,
    pub feedback: usize,
    pub meals: usize,
}

impl Fixture {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Upserts everything into `store`. Re-importing the same file is safe;
    /// only meal history rows are appended again.
    #[tracing::instrument(skip_all)]
    pub async fn import(&self, store: &SqliteStore, now: i64) -> anyhow::Result<ImportSummary> {
        for entry in &self.recipes {
            store.insert_recipe(&entry.recipe, entry.created_at).await?;
        }

        for entry in &self.preferences {
            store
                .save_preferences(&entry.user_id, &entry.preferences, now)
                .await?;
        }

        for entry in &self.feedback {
            store
                .record_feedback(&entry.user_id, &entry.recipe_id, entry.liked, entry.at)
                .await?;
        }

        for meal in &self.meals {
            store
                .record_meal(&meal.user_id, &meal.recipe_id, &meal.cuisine, meal.eaten_at)
                .await?;
        }

        let summary = ImportSummary {
            recipes: self.recipes.len(),
            preferences: self.preferences.len(),
            feedback: self.feedback.len(),
            meals: self.meals.len(),
        };

        tracing::info!(?summary, "fixture imported");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkcast_shared::{DietaryRestriction, MealType};

    #[test]
    fn test_fixture_parses_flattened_entries() {
        let fixture: Fixture = serde_json::from_str(
            r#"{
                "recipes": [{
                    "id": "r1",
                    "title": "Pad thai",
                    "cuisine": "Thai",
                    "meal_type": "dinner",
                    "cook_time": 25,
                    "ingredients": ["200g rice noodles"],
                    "instructions": ["Soak the noodles"],
                    "created_at": 10
                }],
                "preferences": [{
                    "user_id": "u1",
                    "liked_cuisines": ["Thai"],
                    "dietary_restrictions": ["vegetarian"]
                }]
            }"#,
        )
        .expect("valid fixture");

        assert_eq!(fixture.recipes.len(), 1);
        let recipe = &fixture.recipes[0];
        assert_eq!(recipe.created_at, 10);
        assert_eq!(recipe.recipe.id, "r1");
        assert_eq!(recipe.recipe.meal_type, Some(MealType::Dinner));
        assert_eq!(recipe.recipe.instructions, vec!["Soak the noodles"]);

        let prefs = &fixture.preferences[0];
        assert_eq!(prefs.user_id, "u1");
        assert_eq!(
            prefs.preferences.dietary_restrictions,
            vec![DietaryRestriction::Vegetarian]
        );
        assert!(fixture.feedback.is_empty());
        assert!(fixture.meals.is_empty());
    }
}
