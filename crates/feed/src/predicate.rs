use forkcast_shared::{MealType, RecipeSummary, UserScoringPreferences};
use serde::{Deserialize, Serialize};

use crate::FeedConfig;

/// Caller-supplied narrowing, merged into the preference predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedFilters {
    pub meal_type: Option<MealType>,
    /// Minutes.
    pub max_cook_time: Option<u32>,
    pub search: Option<String>,
}

/// Conjunction of row filters the candidate fetch applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipePredicate {
    /// Keep only recipes with no author, i.e. the shared catalog.
    pub shared_pool_only: bool,
    /// Cuisine must be one of these, ignoring ASCII case and outer whitespace.
    pub cuisines: Option<Vec<String>>,
    pub max_cook_time: Option<u32>,
    pub meal_type: Option<MealType>,
    /// Substring of title or description, ignoring ASCII case.
    pub search: Option<String>,
}

impl RecipePredicate {
    pub fn shared_pool() -> Self {
        Self {
            shared_pool_only: true,
            ..Default::default()
        }
    }

    pub fn for_user(
        prefs: &UserScoringPreferences,
        filters: &FeedFilters,
        config: &FeedConfig,
    ) -> Self {
        let liked = distinct_cuisines(&prefs.liked_cuisines);
        let cuisines = (liked.len() >= config.cuisine_filter_min_liked).then_some(liked);

        let preference_cap = prefs
            .cook_time_preference
            .map(|minutes| (minutes as f64 * config.cook_time_slack).round() as u32);

        let max_cook_time = match (preference_cap, filters.max_cook_time) {
            (Some(cap), Some(explicit)) => Some(cap.min(explicit)),
            (cap, explicit) => cap.or(explicit),
        };

        let search = filters
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Self {
            shared_pool_only: true,
            cuisines,
            max_cook_time,
            meal_type: filters.meal_type,
            search,
        }
    }

    /// In-process evaluation, equivalent to the SQL condition.
    pub fn matches(&self, recipe: &RecipeSummary) -> bool {
        if self.shared_pool_only && recipe.created_by.is_some() {
            return false;
        }

        if let Some(cuisines) = &self.cuisines {
            if !cuisines.iter().any(|c| recipe.is_cuisine(c)) {
                return false;
            }
        }

        if self.max_cook_time.is_some_and(|max| recipe.cook_time > max) {
            return false;
        }

        if self
            .meal_type
            .is_some_and(|meal_type| recipe.meal_type != Some(meal_type))
        {
            return false;
        }

        if let Some(search) = &self.search {
            let search = search.to_ascii_lowercase();
            if !recipe.title.to_ascii_lowercase().contains(&search)
                && !recipe.description.to_ascii_lowercase().contains(&search)
            {
                return false;
            }
        }

        true
    }
}

fn distinct_cuisines(cuisines: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = vec![];
    for cuisine in cuisines {
        let cuisine = cuisine.trim();
        if cuisine.is_empty() || distinct.iter().any(|c| c.eq_ignore_ascii_case(cuisine)) {
            continue;
        }
        distinct.push(cuisine.to_owned());
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(liked: &[&str], cook_time: Option<u32>) -> UserScoringPreferences {
        UserScoringPreferences {
            liked_cuisines: liked.iter().map(|c| c.to_string()).collect(),
            cook_time_preference: cook_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_four_liked_cuisines_restrict_pool() {
        let prefs = prefs(&["Italian", "Thai", "Mexican", "Indian"], Some(20));
        let predicate =
            RecipePredicate::for_user(&prefs, &FeedFilters::default(), &FeedConfig::default());

        assert!(predicate.shared_pool_only);
        assert_eq!(predicate.cuisines.as_ref().map(Vec::len), Some(4));
        assert_eq!(predicate.max_cook_time, Some(30));
    }

    #[test]
    fn test_few_liked_cuisines_do_not_restrict() {
        let prefs = prefs(&["Italian", "italian", "Thai"], None);
        let predicate =
            RecipePredicate::for_user(&prefs, &FeedFilters::default(), &FeedConfig::default());

        assert_eq!(predicate.cuisines, None);
        assert_eq!(predicate.max_cook_time, None);
    }

    #[test]
    fn test_tighter_cook_time_wins() {
        let prefs = prefs(&[], Some(40));
        let config = FeedConfig::default();

        let explicit_tighter = FeedFilters {
            max_cook_time: Some(25),
            ..Default::default()
        };
        assert_eq!(
            RecipePredicate::for_user(&prefs, &explicit_tighter, &config).max_cook_time,
            Some(25)
        );

        let explicit_looser = FeedFilters {
            max_cook_time: Some(90),
            ..Default::default()
        };
        assert_eq!(
            RecipePredicate::for_user(&prefs, &explicit_looser, &config).max_cook_time,
            Some(60)
        );
    }

    #[test]
    fn test_matches() {
        let predicate = RecipePredicate {
            shared_pool_only: true,
            cuisines: Some(vec!["italian".to_owned()]),
            max_cook_time: Some(30),
            meal_type: None,
            search: Some("PASTA".to_owned()),
        };
        let recipe = RecipeSummary {
            id: "r1".to_owned(),
            title: "Weeknight pasta".to_owned(),
            cuisine: "Italian".to_owned(),
            cook_time: 25,
            ..Default::default()
        };

        assert!(predicate.matches(&recipe));

        let authored = RecipeSummary {
            created_by: Some("u1".to_owned()),
            ..recipe.clone()
        };
        assert!(!predicate.matches(&authored));

        let slow = RecipeSummary {
            cook_time: 45,
            ..recipe.clone()
        };
        assert!(!predicate.matches(&slow));
    }
}
