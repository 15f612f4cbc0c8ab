use forkcast_scoring::{FullScore, QuickScore, full_score, quick_score};
use forkcast_shared::{Recipe, TemporalContext};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::{
    BehaviorSource, FeedConfig, FeedError, FeedFilters, PreferenceSource, RecipePredicate,
    RecipeStore, Result,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    /// 1-based.
    #[validate(range(min = 1))]
    pub page: u32,
    /// Defaults to the configured page size and is capped at the configured
    /// maximum.
    #[validate(range(min = 1))]
    pub limit: Option<u32>,
    #[serde(default)]
    pub filters: FeedFilters,
    /// Also compute Full Score for the returned page.
    #[serde(default)]
    pub full: bool,
}

impl FeedRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            page: 1,
            limit: None,
            filters: FeedFilters::default(),
            full: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedRecipe {
    pub recipe: Recipe,
    pub quick: QuickScore,
    pub full: Option<FullScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationPage {
    pub recipes: Vec<RankedRecipe>,
    /// Rows matching the predicate before scoring.
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

pub struct Feed<S> {
    store: S,
    config: FeedConfig,
}

impl<S> Feed<S>
where
    S: RecipeStore + PreferenceSource + BehaviorSource,
{
    pub fn new(store: S, config: FeedConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Builds one page of recommendations as of `now`.
    ///
    /// The store is queried twice: once for light candidate rows and once to
    /// hydrate the page. Store failures propagate unchanged.
    #[tracing::instrument(skip(self, input), fields(user_id = %input.user_id, page = input.page))]
    pub async fn recommend(
        &self,
        input: FeedRequest,
        now: OffsetDateTime,
    ) -> Result<RecommendationPage> {
        input.validate()?;

        let prefs = self
            .store
            .load_preferences(&input.user_id)
            .await?
            .ok_or_else(|| FeedError::MissingPreferences {
                user_id: input.user_id.to_owned(),
            })?;

        let limit = self.config.page_limit(input.limit);
        let predicate = RecipePredicate::for_user(&prefs, &input.filters, &self.config);
        let total = self.store.count(&predicate).await?;

        // pages stride by the fetch window so no candidate is scored twice
        let fetch_size = self.config.fetch_size(limit).max(1);
        let offset = u64::from(input.page - 1) * u64::from(fetch_size);
        let candidates = self
            .store
            .find_candidates(&predicate, fetch_size, offset)
            .await?;

        tracing::debug!(
            total,
            fetched = candidates.len(),
            fetch_size,
            offset,
            "fetched candidates"
        );

        let mut scored = candidates
            .iter()
            .map(|recipe| quick_score(recipe, &prefs))
            .filter(|score| score.score >= self.config.min_quick_score)
            .collect::<Vec<_>>();

        let survivors = scored.len();

        // stable: equal scores keep fetch order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit as usize);

        tracing::debug!(survivors, kept = scored.len(), "quick scored candidates");

        let ids = scored
            .iter()
            .map(|score| score.recipe_id.to_owned())
            .collect::<Vec<_>>();
        let mut hydrated = self.store.hydrate(&ids).await?.into_iter().peekable();

        let full_context = if input.full {
            let behavior = self.store.load_behavior(&input.user_id, now).await?;
            Some((behavior, TemporalContext::from_datetime(now)))
        } else {
            None
        };

        let mut recipes = Vec::with_capacity(scored.len());
        for quick in scored {
            let Some(recipe) = hydrated.next_if(|recipe| recipe.id == quick.recipe_id) else {
                tracing::warn!(recipe_id = %quick.recipe_id, "recipe vanished before hydration");
                continue;
            };

            let full = full_context
                .as_ref()
                .map(|(behavior, temporal)| full_score(&recipe, &prefs, behavior, temporal));

            recipes.push(RankedRecipe {
                recipe,
                quick,
                full,
            });
        }

        let total_pages = total.div_ceil(u64::from(fetch_size));

        tracing::info!(returned = recipes.len(), total, "feed page built");

        Ok(RecommendationPage {
            recipes,
            total,
            page: input.page,
            limit,
            total_pages,
        })
    }
}
