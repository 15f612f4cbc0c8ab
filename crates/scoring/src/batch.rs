use forkcast_shared::{RecipeSummary, SuitabilityFlags, UserScoringPreferences};
use serde::Serialize;

use crate::{clamp_score, quick_score};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecommendation {
    pub recipe_id: String,
    pub score: u8,
    pub quick_score: u8,
    pub suitability_bonus: u8,
}

/// Only recipes flagged for meal prep or batch cooking are considered.
pub fn is_batch_candidate(flags: &SuitabilityFlags) -> bool {
    flags.meal_prep_suitable || flags.batch_friendly
}

pub fn suitability_bonus(flags: &SuitabilityFlags) -> u8 {
    let mut bonus = 0;
    if flags.freezable {
        bonus += 10;
    }
    if flags.batch_friendly {
        bonus += 10;
    }
    if flags.weekly_prep_friendly {
        bonus += 5;
    }
    if flags.meal_prep_suitable {
        bonus += 5;
    }
    bonus
}

/// Ranks batch-cooking candidates by Quick Score plus suitability bonuses.
/// Vetoed recipes are dropped; equal scores keep input order.
pub fn recommend_batch_cooking(
    candidates: &[RecipeSummary],
    prefs: &UserScoringPreferences,
    limit: usize,
) -> Vec<BatchRecommendation> {
    let mut ranked = candidates
        .iter()
        .filter(|recipe| is_batch_candidate(&recipe.flags))
        .filter_map(|recipe| {
            let quick = quick_score(recipe, prefs);
            if quick.verdict.is_vetoed() {
                return None;
            }

            let bonus = suitability_bonus(&recipe.flags);

            Some(BatchRecommendation {
                recipe_id: quick.recipe_id,
                score: clamp_score(quick.score as i32 + bonus as i32),
                quick_score: quick.score,
                suitability_bonus: bonus,
            })
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
