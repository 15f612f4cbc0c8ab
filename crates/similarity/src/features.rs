use std::collections::BTreeSet;

use forkcast_shared::RecipeSummary;
use forkcast_units::ingredient_name;

const STOP_WORDS: &[&str] = &[
    "with", "and", "from", "this", "that", "these", "those", "your", "into", "onto", "over",
    "under", "about", "recipe", "recipes", "easy", "best", "quick", "simple", "made", "make",
    "then", "them", "they", "have", "just", "some", "very", "more", "most", "also", "until",
    "minutes", "perfect", "delicious", "homemade", "style", "favorite", "favourite",
];

/// Lower-cased words longer than three characters, stop words removed.
pub fn keywords(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() > 3)
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

pub fn recipe_keywords(recipe: &RecipeSummary) -> BTreeSet<String> {
    keywords(&format!("{} {}", recipe.title, recipe.description))
}

/// Ingredient base names with quantities, units and notes stripped.
pub fn ingredient_set(recipe: &RecipeSummary) -> BTreeSet<String> {
    recipe
        .ingredients
        .iter()
        .map(|line| ingredient_name(line))
        .filter(|name| !name.is_empty())
        .collect()
}

/// |a ∩ b| / |a ∪ b|, 0 when both are empty.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }

    a.intersection(b).count() as f64 / union as f64
}

/// `1 - |a - b| / max(a, b, 1)`, kept within 0–1.
pub fn closeness(a: f64, b: f64) -> f64 {
    let denominator = a.max(b).max(1.0);
    (1.0 - (a - b).abs() / denominator).clamp(0.0, 1.0)
}
