use std::path::PathBuf;

use forkcast::{Config, fixture::Fixture};
use forkcast_feed::{RecipePredicate, RecipeStore};
use forkcast_scoring::{
    ComplexityAssessment, ComplexityInput, HealthGrade, HealthInput, SpiceDetection, SpiceInput,
    assess_recipe_complexity, calculate_health_grade, detect_spice_level,
};
use forkcast_similarity::{SimilarityOptions, broaden_search, find_similar};
use forkcast_units::aggregate_lines;
use serde::Serialize;
use time::OffsetDateTime;

use super::{open_store, print_json};

#[tracing::instrument(skip(config))]
pub async fn import(config: Config, file: PathBuf) -> anyhow::Result<()> {
    let fixture = Fixture::from_path(&file)?;
    let store = open_store(&config).await?;

    let summary = fixture
        .import(&store, OffsetDateTime::now_utc().unix_timestamp())
        .await?;

    print_json(&summary)
}

#[derive(Serialize)]
struct RecipeGrade {
    recipe_id: String,
    health: HealthGrade,
    spice: SpiceDetection,
    complexity: ComplexityAssessment,
}

#[tracing::instrument(skip(config))]
pub async fn grade(config: Config, recipe_id: String) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    let Some(recipe) = store.find_by_id(&recipe_id).await? else {
        anyhow::bail!("recipe {recipe_id} not found");
    };

    print_json(&RecipeGrade {
        health: calculate_health_grade(&HealthInput::from(&recipe)),
        spice: detect_spice_level(&SpiceInput::from(&recipe)),
        complexity: assess_recipe_complexity(&ComplexityInput::from(&recipe)),
        recipe_id,
    })
}

#[tracing::instrument(skip(config))]
pub async fn similar(
    config: Config,
    recipe_id: String,
    limit: Option<usize>,
    min_score: Option<f64>,
) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    let Some(target) = store.find_by_id(&recipe_id).await? else {
        anyhow::bail!("recipe {recipe_id} not found");
    };

    let pool = store
        .find_candidates(&RecipePredicate::shared_pool(), config.feed.max_candidates, 0)
        .await?;

    let defaults = SimilarityOptions::default();
    let options = SimilarityOptions {
        limit: limit.unwrap_or(defaults.limit),
        min_score: min_score.unwrap_or(defaults.min_score),
        ..defaults
    };

    print_json(&find_similar(&target.summary, &pool, &options))
}

#[derive(Serialize)]
struct SearchResult {
    exact: Vec<String>,
    related: Vec<forkcast_similarity::BroadenedRecipe>,
}

#[tracing::instrument(skip(config))]
pub async fn search(config: Config, query: String, limit: Option<u32>) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let limit = config.feed.page_limit(limit);

    let exact_predicate = RecipePredicate {
        search: Some(query.clone()),
        ..RecipePredicate::shared_pool()
    };
    let exact = store.find_candidates(&exact_predicate, limit, 0).await?;
    let pool = store
        .find_candidates(&RecipePredicate::shared_pool(), config.feed.max_candidates, 0)
        .await?;

    tracing::debug!(exact = exact.len(), pool = pool.len(), "broadening search");

    let related = broaden_search(&query, &exact, &pool, limit as usize);

    print_json(&SearchResult {
        exact: exact.into_iter().map(|r| r.id).collect(),
        related,
    })
}

#[tracing::instrument(skip(config))]
pub async fn shopping(config: Config, recipe_ids: Vec<String>) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let recipes = store.find_many(&recipe_ids).await?;

    if recipes.len() < recipe_ids.len() {
        tracing::warn!(
            requested = recipe_ids.len(),
            found = recipes.len(),
            "some recipes were not found"
        );
    }

    let lines = recipes
        .iter()
        .flat_map(|recipe| recipe.ingredients.iter().cloned())
        .collect::<Vec<_>>();

    print_json(&aggregate_lines(&lines))
}
