use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use forkcast_feed::FeedConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FORKCAST__DATABASE__URL, FORKCAST__FEED__MAX_LIMIT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:forkcast.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FORKCAST")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.feed.over_fetch_factor < 1 {
            return Err("Feed over_fetch_factor must be at least 1".to_string());
        }
        if self.feed.max_candidates < 1 {
            return Err("Feed max_candidates must be at least 1".to_string());
        }
        if self.feed.min_quick_score > 100 {
            return Err("Feed min_quick_score must be between 0 and 100".to_string());
        }
        if self.feed.cook_time_slack <= 0.0 {
            return Err("Feed cook_time_slack must be greater than 0".to_string());
        }
        if self.feed.default_limit < 1 || self.feed.max_limit < 1 {
            return Err("Feed page limits must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            observability: ObservabilityConfig::default(),
            feed: FeedConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_over_fetch() {
        let mut config = valid_config();
        config.feed.over_fetch_factor = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_min_score_out_of_range() {
        let mut config = valid_config();
        config.feed.min_quick_score = 101;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_non_positive_slack() {
        let mut config = valid_config();
        config.feed.cook_time_slack = 0.0;

        assert!(config.validate().is_err());
    }
}
