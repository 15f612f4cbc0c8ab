use std::collections::HashMap;

use forkcast_shared::{BehavioralSignal, Recipe, RecipeSummary, UserScoringPreferences};
use time::{Duration, OffsetDateTime};

use crate::RecipePredicate;

/// Most recent likes and dislikes read per request.
pub const FEEDBACK_HISTORY_LIMIT: u32 = 50;
/// Most recent meals read per request.
pub const MEAL_HISTORY_LIMIT: u32 = 20;
/// Window for "ate this cuisine recently".
pub const RECENT_MEAL_WINDOW: Duration = Duration::days(7);

#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    /// Rows matching `predicate`, ignoring paging.
    async fn count(&self, predicate: &RecipePredicate) -> anyhow::Result<u64>;

    /// Light rows (no instructions), newest first with ties broken by id.
    async fn find_candidates(
        &self,
        predicate: &RecipePredicate,
        limit: u32,
        offset: u64,
    ) -> anyhow::Result<Vec<RecipeSummary>>;

    /// Full rows for `ids`, in no particular order. Unknown ids are skipped.
    async fn find_many(&self, ids: &[String]) -> anyhow::Result<Vec<Recipe>>;

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        Ok(self.find_many(&[id.to_owned()]).await?.into_iter().next())
    }

    /// Full rows for `ids`, in the order given.
    async fn hydrate(&self, ids: &[String]) -> anyhow::Result<Vec<Recipe>> {
        let mut found = self
            .find_many(ids)
            .await?
            .into_iter()
            .map(|recipe| (recipe.id.to_owned(), recipe))
            .collect::<HashMap<_, _>>();

        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }
}

#[async_trait::async_trait]
pub trait PreferenceSource: Send + Sync {
    async fn load_preferences(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<UserScoringPreferences>>;
}

#[async_trait::async_trait]
pub trait BehaviorSource: Send + Sync {
    /// Last [`FEEDBACK_HISTORY_LIMIT`] likes and dislikes, and the cuisines of
    /// the last [`MEAL_HISTORY_LIMIT`] meals eaten within
    /// [`RECENT_MEAL_WINDOW`] of `now`.
    async fn load_behavior(
        &self,
        user_id: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<BehavioralSignal>;
}
