use std::{path::Path, str::FromStr};

use forkcast_feed::SqliteStore;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_store(path: &Path) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    forkcast_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(SqliteStore::new(pool))
}
