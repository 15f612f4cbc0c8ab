pub mod catalog;
pub mod feed;

use forkcast::Config;
use forkcast_feed::SqliteStore;
use serde::Serialize;

/// Open the configured database as a store.
async fn open_store(config: &Config) -> anyhow::Result<SqliteStore> {
    let pool =
        forkcast::db::create_pool(&config.database.url, config.database.max_connections).await?;

    Ok(SqliteStore::new(pool))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
