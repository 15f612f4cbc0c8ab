use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

async fn connect(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("forkcast.db");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);

    Ok(SqlitePool::connect_with(opts).await?)
}

#[tokio::test]
async fn test_migrations_create_tables() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = connect(&dir).await?;
    let mut conn = pool.acquire().await?;

    forkcast_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' ORDER BY name",
    )
    .fetch_all(&mut *conn)
    .await?;
    let tables = tables.into_iter().map(|(name,)| name).collect::<Vec<_>>();

    for expected in [
        "meal_history",
        "recipe_catalog",
        "recipe_feedback",
        "user_preference",
    ] {
        assert!(tables.contains(&expected.to_owned()), "missing {expected}");
    }

    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = connect(&dir).await?;
    let mut conn = pool.acquire().await?;

    forkcast_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    forkcast_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}
