use std::collections::BTreeSet;

use forkcast_shared::RecipeSummary;
use serde::Serialize;

use crate::features::{jaccard, keywords, recipe_keywords};

const CUISINE_WEIGHT: f64 = 0.5;
const CUISINE_FLOOR: f64 = 0.3;
const RELATED_DISH_WEIGHT: f64 = 0.4;
const QUERY_KEYWORD_WEIGHT: f64 = 0.3;
const EXACT_KEYWORD_WEIGHT: f64 = 0.2;

/// Dish types that satisfy a search for another.
const RELATED_DISHES: &[(&str, &[&str])] = &[
    ("taco", &["burrito", "quesadilla", "enchilada", "fajita", "nachos"]),
    ("burrito", &["taco", "quesadilla", "enchilada", "bowl"]),
    ("pizza", &["calzone", "flatbread", "focaccia", "stromboli"]),
    ("pasta", &["lasagna", "spaghetti", "penne", "gnocchi", "risotto"]),
    ("burger", &["sandwich", "slider", "wrap"]),
    ("sandwich", &["wrap", "panini", "burger", "sub"]),
    ("soup", &["stew", "chowder", "broth", "chili", "bisque"]),
    ("stew", &["soup", "curry", "chili", "casserole"]),
    ("curry", &["stew", "masala", "korma", "dal"]),
    ("salad", &["bowl", "slaw", "poke"]),
    ("stir fry", &["fried rice", "noodles", "lo mein", "teriyaki"]),
    ("pancake", &["waffle", "crepe", "french toast"]),
    ("cake", &["cupcake", "muffin", "brownie", "loaf"]),
    ("cookie", &["brownie", "biscuit", "bar"]),
];

/// Contributions summed into a broadened score. Not normalised to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BroadenBreakdown {
    pub cuisine: f64,
    pub related_dish: f64,
    pub query_keywords: f64,
    pub exact_keywords: f64,
}

impl BroadenBreakdown {
    pub fn total(&self) -> f64 {
        self.cuisine + self.related_dish + self.query_keywords + self.exact_keywords
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadenedRecipe {
    pub recipe_id: String,
    pub score: f64,
    pub breakdown: BroadenBreakdown,
}

/// Related dish words for every dish type named in `text`.
fn related_dish_words(text: &str) -> BTreeSet<&'static str> {
    let text = text.to_lowercase();

    RELATED_DISHES
        .iter()
        .filter(|(dish, _)| text.contains(dish))
        .flat_map(|(_, related)| related.iter().copied())
        .collect()
}

/// Widens a search that found `exact` matches with related recipes from
/// `pool`.
///
/// A candidate gains weight for sharing a cuisine with the exact matches
/// (0.5 scaled by the share of matches in that cuisine, never below 0.3), for
/// being a related dish type (0.4), and for keyword overlap with the query
/// (0.3) and with the exact matches (0.2). Exact matches themselves and
/// candidates with no signal are left out.
pub fn broaden_search(
    query: &str,
    exact: &[RecipeSummary],
    pool: &[RecipeSummary],
    limit: usize,
) -> Vec<BroadenedRecipe> {
    let query_keywords = keywords(query);
    let exact_keywords = exact
        .iter()
        .flat_map(recipe_keywords)
        .collect::<BTreeSet<_>>();
    let related = related_dish_words(
        &std::iter::once(query)
            .chain(exact.iter().map(|r| r.title.as_str()))
            .collect::<Vec<_>>()
            .join(" "),
    );

    let mut ranked = pool
        .iter()
        .filter(|candidate| !exact.iter().any(|e| e.id == candidate.id))
        .filter_map(|candidate| {
            let candidate_keywords = recipe_keywords(candidate);
            let title = candidate.title.to_lowercase();

            let breakdown = BroadenBreakdown {
                cuisine: cuisine_boost(candidate, exact),
                related_dish: if related.iter().any(|word| title.contains(word)) {
                    RELATED_DISH_WEIGHT
                } else {
                    0.0
                },
                query_keywords: QUERY_KEYWORD_WEIGHT
                    * jaccard(&query_keywords, &candidate_keywords),
                exact_keywords: EXACT_KEYWORD_WEIGHT
                    * jaccard(&exact_keywords, &candidate_keywords),
            };
            let score = breakdown.total();

            (score > 0.0).then(|| BroadenedRecipe {
                recipe_id: candidate.id.clone(),
                score,
                breakdown,
            })
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

fn cuisine_boost(candidate: &RecipeSummary, exact: &[RecipeSummary]) -> f64 {
    if exact.is_empty() || candidate.cuisine.trim().is_empty() {
        return 0.0;
    }

    let sharing = exact
        .iter()
        .filter(|e| e.is_cuisine(&candidate.cuisine))
        .count();

    if sharing == 0 {
        return 0.0;
    }

    (CUISINE_WEIGHT * sharing as f64 / exact.len() as f64).max(CUISINE_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, cuisine: &str, title: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_owned(),
            cuisine: cuisine.to_owned(),
            title: title.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_related_dish_words() {
        let words = related_dish_words("Crispy Fish Tacos");
        assert!(words.contains("burrito"));
        assert!(words.contains("quesadilla"));
        assert!(!words.contains("calzone"));
    }

    #[test]
    fn test_cuisine_boost_floor() {
        let exact = vec![
            recipe("e1", "Mexican", "Fish tacos"),
            recipe("e2", "Korean", "Bulgogi tacos"),
            recipe("e3", "American", "Breakfast tacos"),
        ];

        // one of three matches shares the cuisine: 0.5 / 3 lifts to 0.3
        let candidate = recipe("c", "mexican", "Pozole");
        assert_eq!(cuisine_boost(&candidate, &exact), CUISINE_FLOOR);
        assert_eq!(cuisine_boost(&candidate, &exact[..1]), CUISINE_WEIGHT);
        assert_eq!(cuisine_boost(&recipe("d", "French", "Soup"), &exact), 0.0);
    }
}
