use std::collections::BTreeSet;

use forkcast_shared::RecipeSummary;
use serde::{Deserialize, Serialize};

use crate::features::{closeness, ingredient_set, jaccard, recipe_keywords};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub cuisine: f64,
    pub ingredients: f64,
    pub nutrition: f64,
    pub cook_time: f64,
    pub semantic: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            cuisine: 0.25,
            ingredients: 0.30,
            nutrition: 0.20,
            cook_time: 0.10,
            semantic: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityOptions {
    pub limit: usize,
    pub min_score: f64,
    pub weights: SimilarityWeights,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            min_score: 0.1,
            weights: SimilarityWeights::default(),
        }
    }
}

/// Each component on a 0–1 scale before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub cuisine: f64,
    pub ingredients: f64,
    pub nutrition: f64,
    pub cook_time: f64,
    pub semantic: f64,
}

impl SimilarityBreakdown {
    pub fn weighted(&self, weights: &SimilarityWeights) -> f64 {
        self.cuisine * weights.cuisine
            + self.ingredients * weights.ingredients
            + self.nutrition * weights.nutrition
            + self.cook_time * weights.cook_time
            + self.semantic * weights.semantic
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarRecipe {
    pub recipe_id: String,
    pub score: f64,
    pub breakdown: SimilarityBreakdown,
}

/// Macro closeness weighted 0.4 calories, 0.25 protein, 0.2 carbs, 0.15 fat.
/// Facts are already per serving.
fn nutrition_similarity(a: &RecipeSummary, b: &RecipeSummary) -> f64 {
    let (a, b) = (&a.nutrition, &b.nutrition);

    0.4 * closeness(a.calories, b.calories)
        + 0.25 * closeness(a.protein_g, b.protein_g)
        + 0.2 * closeness(a.carbs_g, b.carbs_g)
        + 0.15 * closeness(a.fat_g, b.fat_g)
}

pub fn similarity_breakdown(
    target: &RecipeSummary,
    candidate: &RecipeSummary,
) -> SimilarityBreakdown {
    TargetFeatures::new(target).compare(candidate)
}

/// Target-side sets computed once per ranking.
struct TargetFeatures<'a> {
    recipe: &'a RecipeSummary,
    ingredients: BTreeSet<String>,
    keywords: BTreeSet<String>,
}

impl<'a> TargetFeatures<'a> {
    fn new(recipe: &'a RecipeSummary) -> Self {
        Self {
            recipe,
            ingredients: ingredient_set(recipe),
            keywords: recipe_keywords(recipe),
        }
    }

    fn compare(&self, candidate: &RecipeSummary) -> SimilarityBreakdown {
        let target = self.recipe;

        SimilarityBreakdown {
            cuisine: if target.is_cuisine(&candidate.cuisine) {
                1.0
            } else {
                0.0
            },
            ingredients: jaccard(&self.ingredients, &ingredient_set(candidate)),
            nutrition: nutrition_similarity(target, candidate),
            cook_time: closeness(target.cook_time as f64, candidate.cook_time as f64),
            semantic: jaccard(&self.keywords, &recipe_keywords(candidate)),
        }
    }
}

/// Ranks `pool` by similarity to `target`. The target itself is never part of
/// the result, nor is anything scoring below `options.min_score`.
pub fn find_similar(
    target: &RecipeSummary,
    pool: &[RecipeSummary],
    options: &SimilarityOptions,
) -> Vec<SimilarRecipe> {
    let features = TargetFeatures::new(target);

    let mut ranked = pool
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .filter_map(|candidate| {
            let breakdown = features.compare(candidate);
            let score = breakdown.weighted(&options.weights);

            (score >= options.min_score).then(|| SimilarRecipe {
                recipe_id: candidate.id.clone(),
                score,
                breakdown,
            })
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(options.limit);
    ranked
}
