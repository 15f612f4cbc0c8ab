use std::collections::HashMap;

use forkcast_shared::{BehavioralSignal, Recipe, RecipeSummary, UserScoringPreferences};
use time::OffsetDateTime;

use crate::{
    BehaviorSource, FEEDBACK_HISTORY_LIMIT, MEAL_HISTORY_LIMIT, PreferenceSource,
    RECENT_MEAL_WINDOW, RecipePredicate, RecipeStore,
};

struct StoredRecipe {
    recipe: Recipe,
    created_at: i64,
}

struct Feedback {
    user_id: String,
    recipe_id: String,
    liked: bool,
    at: i64,
}

struct Meal {
    user_id: String,
    cuisine: String,
    eaten_at: i64,
}

/// Store backed by plain collections. Populate it up front, then share it
/// read-only with the pipeline.
#[derive(Default)]
pub struct MemoryStore {
    recipes: Vec<StoredRecipe>,
    preferences: HashMap<String, UserScoringPreferences>,
    feedback: Vec<Feedback>,
    meals: Vec<Meal>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_recipe(&mut self, mut recipe: Recipe, created_at: i64) {
        recipe.summary.cuisine = recipe.summary.cuisine.trim().to_owned();
        self.recipes.retain(|stored| stored.recipe.id != recipe.id);
        self.recipes.push(StoredRecipe { recipe, created_at });
    }

    pub fn save_preferences(&mut self, user_id: impl Into<String>, prefs: UserScoringPreferences) {
        self.preferences.insert(user_id.into(), prefs);
    }

    pub fn record_feedback(
        &mut self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
        liked: bool,
        at: i64,
    ) {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();
        self.feedback
            .retain(|f| f.user_id != user_id || f.recipe_id != recipe_id);
        self.feedback.push(Feedback {
            user_id,
            recipe_id,
            liked,
            at,
        });
    }

    pub fn record_meal(
        &mut self,
        user_id: impl Into<String>,
        cuisine: impl Into<String>,
        eaten_at: i64,
    ) {
        self.meals.push(Meal {
            user_id: user_id.into(),
            cuisine: cuisine.into(),
            eaten_at,
        });
    }

    fn matching(&self, predicate: &RecipePredicate) -> impl Iterator<Item = &StoredRecipe> {
        self.recipes
            .iter()
            .filter(move |stored| predicate.matches(&stored.recipe.summary))
    }

    fn recent_feedback(&self, user_id: &str, liked: bool) -> Vec<String> {
        let mut rows = self
            .feedback
            .iter()
            .filter(|f| f.user_id == user_id && f.liked == liked)
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.at.cmp(&a.at));

        rows.into_iter()
            .take(FEEDBACK_HISTORY_LIMIT as usize)
            .map(|f| f.recipe_id.to_owned())
            .collect()
    }
}

#[async_trait::async_trait]
impl RecipeStore for MemoryStore {
    async fn count(&self, predicate: &RecipePredicate) -> anyhow::Result<u64> {
        Ok(self.matching(predicate).count() as u64)
    }

    async fn find_candidates(
        &self,
        predicate: &RecipePredicate,
        limit: u32,
        offset: u64,
    ) -> anyhow::Result<Vec<RecipeSummary>> {
        let mut rows = self.matching(predicate).collect::<Vec<_>>();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.recipe.id.cmp(&a.recipe.id))
        });

        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|stored| stored.recipe.summary.clone())
            .collect())
    }

    async fn find_many(&self, ids: &[String]) -> anyhow::Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|stored| ids.contains(&stored.recipe.id))
            .map(|stored| stored.recipe.clone())
            .collect())
    }
}

#[async_trait::async_trait]
impl PreferenceSource for MemoryStore {
    async fn load_preferences(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<UserScoringPreferences>> {
        Ok(self.preferences.get(user_id).cloned())
    }
}

#[async_trait::async_trait]
impl BehaviorSource for MemoryStore {
    async fn load_behavior(
        &self,
        user_id: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<BehavioralSignal> {
        let since = (now - RECENT_MEAL_WINDOW).unix_timestamp();
        let mut meals = self
            .meals
            .iter()
            .filter(|m| m.user_id == user_id && m.eaten_at >= since)
            .collect::<Vec<_>>();
        meals.sort_by(|a, b| b.eaten_at.cmp(&a.eaten_at));

        Ok(BehavioralSignal {
            liked_recipe_ids: self.recent_feedback(user_id, true),
            disliked_recipe_ids: self.recent_feedback(user_id, false),
            recent_cuisines: meals
                .into_iter()
                .take(MEAL_HISTORY_LIMIT as usize)
                .map(|m| m.cuisine.to_owned())
                .collect(),
        })
    }
}
