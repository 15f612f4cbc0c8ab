//! Tests for configuration system

use forkcast::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_feed_section_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("forkcast.toml");
    std::fs::write(
        &path,
        r#"
[database]
max_connections = 3

[observability]
log_level = "debug"

[feed]
over_fetch_factor = 5
min_quick_score = 40
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.database.max_connections, 3);
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.feed.over_fetch_factor, 5);
    assert_eq!(config.feed.min_quick_score, 40);
    // untouched keys keep their defaults
    assert_eq!(config.feed.max_candidates, 300);
    assert_eq!(config.feed.default_limit, 20);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_missing_file_uses_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.display().to_string()))?;

    assert!(!config.database.url.is_empty());
    assert_eq!(config.feed.over_fetch_factor, 3);
    assert_eq!(config.feed.max_limit, 100);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_rejects_invalid_feed_values() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("forkcast.toml");
    std::fs::write(&path, "[feed]\ncook_time_slack = 0.0\n")?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert!(config.validate().is_err());

    Ok(())
}
