use serde::Deserialize;

/// Pipeline tunables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FeedConfig {
    /// Candidates fetched per requested row before pruning.
    #[serde(default = "default_over_fetch_factor")]
    pub over_fetch_factor: u32,
    /// Hard cap on the candidate fetch.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: u32,
    /// Quick Score below this is dropped.
    #[serde(default = "default_min_quick_score")]
    pub min_quick_score: u8,
    /// Multiplier applied to the user's cook-time preference.
    #[serde(default = "default_cook_time_slack")]
    pub cook_time_slack: f64,
    /// Liked cuisines needed before the feed restricts to them.
    #[serde(default = "default_cuisine_filter_min_liked")]
    pub cuisine_filter_min_liked: usize,
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            over_fetch_factor: default_over_fetch_factor(),
            max_candidates: default_max_candidates(),
            min_quick_score: default_min_quick_score(),
            cook_time_slack: default_cook_time_slack(),
            cuisine_filter_min_liked: default_cuisine_filter_min_liked(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl FeedConfig {
    /// Rows fetched for a page of `limit`.
    pub fn fetch_size(&self, limit: u32) -> u32 {
        self.over_fetch_factor
            .saturating_mul(limit)
            .min(self.max_candidates)
    }

    /// Requested limit, or the default, capped at `max_limit`. Never zero.
    pub fn page_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
            .max(1)
    }
}

fn default_over_fetch_factor() -> u32 {
    3
}

fn default_max_candidates() -> u32 {
    300
}

fn default_min_quick_score() -> u8 {
    30
}

fn default_cook_time_slack() -> f64 {
    1.5
}

fn default_cuisine_filter_min_liked() -> usize {
    3
}

fn default_limit() -> u32 {
    20
}

fn default_max_limit() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_size_is_capped() {
        let config = FeedConfig::default();

        assert_eq!(config.fetch_size(20), 60);
        assert_eq!(config.fetch_size(100), 300);
        assert_eq!(config.fetch_size(u32::MAX), 300);
    }

    #[test]
    fn test_page_limit() {
        let config = FeedConfig::default();

        assert_eq!(config.page_limit(None), 20);
        assert_eq!(config.page_limit(Some(5)), 5);
        assert_eq!(config.page_limit(Some(500)), 100);
    }
}
